//! The wheel state handle.
//!
//! One `SpinController` per handle, owned behind `Rc<RefCell<..>>` and
//! handed to components through a `ContextProvider` — an explicit state
//! owner rather than an ambient singleton, so a page could mount several
//! independent wheels. A version counter drives re-renders after each
//! mutation.

use std::cell::RefCell;
use std::rc::Rc;

use engine::roulette::{Item, Roulette};
use engine::spin::SpinController;
use engine::storage;
use gloo_timers::callback::Timeout;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use uuid::Uuid;
use yew::prelude::*;

use crate::sound::{self, Sound};
use crate::storage as local;

#[derive(Clone)]
pub struct WheelHandle {
    controller: Rc<RefCell<SpinController>>,
    /// Cancel handle for the pending settle callback. Dropping it cancels
    /// the timer, which is what loading a roulette mid-spin relies on.
    pending: Rc<RefCell<Option<Timeout>>>,
    version: UseStateHandle<u64>,
}

impl PartialEq for WheelHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.controller, &other.controller) && *self.version == *other.version
    }
}

impl WheelHandle {
    // --- read side --------------------------------------------------------

    pub fn items(&self) -> Vec<Item> {
        self.controller.borrow().items().to_vec()
    }

    pub fn current_name(&self) -> String {
        self.controller.borrow().current_roulette().name.clone()
    }

    pub fn saved(&self) -> Vec<Roulette> {
        self.controller.borrow().saved_roulettes().to_vec()
    }

    pub fn winner(&self) -> Option<Item> {
        self.controller.borrow().winning_item().cloned()
    }

    pub fn is_spinning(&self) -> bool {
        self.controller.borrow().is_spinning()
    }

    pub fn angle(&self) -> f64 {
        self.controller.borrow().cumulative_angle()
    }

    pub fn auto_remove_enabled(&self) -> bool {
        self.controller.borrow().auto_remove_enabled()
    }

    /// Duration of the in-flight spin; drives the CSS transition.
    pub fn spin_duration_ms(&self) -> Option<u32> {
        self.controller.borrow().spin_duration_ms()
    }

    // --- item editing -----------------------------------------------------

    pub fn add_item(&self, label: &str) {
        self.controller.borrow_mut().add_item(label);
        self.bump();
    }

    pub fn remove_item(&self, id: Uuid) {
        self.controller.borrow_mut().remove_item(id);
        self.bump();
    }

    pub fn update_item(&self, id: Uuid, label: &str) {
        self.controller.borrow_mut().update_item(id, label);
        self.bump();
    }

    pub fn clear_items(&self) {
        self.controller.borrow_mut().clear_items();
        self.bump();
    }

    pub fn set_auto_remove(&self, enabled: bool) {
        self.controller.borrow_mut().set_auto_remove(enabled);
        self.bump();
    }

    pub fn clear_result(&self) {
        self.controller.borrow_mut().clear_result();
        self.bump();
    }

    // --- spinning ---------------------------------------------------------

    pub fn spin(&self, sound_enabled: bool) {
        let single_item = self.controller.borrow().items().len() == 1;
        let plan = self.controller.borrow_mut().start_spin();
        if single_item && plan.is_none() {
            // A one-item wheel resolves without entering the Spinning phase.
            sound::play(Sound::Result, sound_enabled);
        }
        if let Some(plan) = plan {
            sound::play(Sound::Spin, sound_enabled);

            let controller = self.controller.clone();
            let pending = self.pending.clone();
            let version = self.version.clone();
            let timeout = Timeout::new(plan.duration_ms, move || {
                controller.borrow_mut().settle();
                pending.borrow_mut().take();
                sound::play(Sound::Result, sound_enabled);
                version.set((*version).wrapping_add(1));
            });
            *self.pending.borrow_mut() = Some(timeout);
        }
        self.bump();
    }

    // --- persistence boundary ---------------------------------------------

    pub fn create_new(&self, name: &str) {
        self.cancel_pending();
        self.controller.borrow_mut().create_new(name);
        self.bump();
    }

    pub fn save_current(&self, name: &str) {
        self.controller.borrow_mut().save_current(name);
        self.persist_saved();
        self.bump();
    }

    pub fn load(&self, id: Uuid) {
        self.cancel_pending();
        self.controller.borrow_mut().load(id);
        self.bump();
    }

    pub fn delete_saved(&self, id: Uuid) {
        self.controller.borrow_mut().delete_saved(id);
        self.persist_saved();
        self.bump();
    }

    fn persist_saved(&self) {
        let controller = self.controller.borrow();
        match storage::encode_roulettes(controller.saved_roulettes()) {
            Ok(blob) => local::write(storage::ROULETTES_KEY, &blob),
            Err(err) => log::warn!("failed to encode saved roulettes: {err}"),
        }
    }

    fn cancel_pending(&self) {
        self.pending.borrow_mut().take();
    }

    fn bump(&self) {
        self.version.set((*self.version).wrapping_add(1));
    }
}

#[hook]
pub fn use_wheel() -> WheelHandle {
    let version = use_state(|| 0u64);
    let controller = use_mut_ref(|| {
        let rng = Box::new(SmallRng::from_entropy());
        let clock = Box::new(|| js_sys::Date::now() as u64) as Box<dyn Fn() -> u64>;
        let mut controller = SpinController::new(rng, clock);
        if let Some(blob) = local::read(storage::ROULETTES_KEY) {
            controller.restore_saved(storage::decode_roulettes(&blob));
        }
        controller
    });
    let pending = use_mut_ref(|| None);

    WheelHandle {
        controller,
        pending,
        version,
    }
}
