//! The spin state machine.
//!
//! A [`SpinController`] owns the current roulette, the saved-roulette
//! collection and all spin state. It runs on a single logical thread: the
//! host calls [`SpinController::start_spin`], animates the returned plan,
//! and calls [`SpinController::settle`] once the settle delay has elapsed.
//! The winner is committed at spin start; the settle step only reveals it.

use rand::{Rng, RngCore};
use uuid::Uuid;

use crate::roulette::{Item, Roulette};
use crate::wheel;

/// Millisecond-epoch clock, injected so tests can pin timestamps.
pub type Clock = Box<dyn Fn() -> u64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinPhase {
    Idle,
    Spinning,
}

/// What the host needs to animate one spin. The chosen winner is
/// deliberately not part of the plan; it is revealed by `settle`.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinPlan {
    /// New cumulative rotation in degrees, to be applied as a clockwise
    /// transform with an eased transition over `duration_ms`.
    pub final_angle: f64,
    pub duration_ms: u32,
}

struct PendingSpin {
    target: usize,
    /// Items as they were at spin start. The published winner always comes
    /// from here, so mid-spin edits cannot invalidate the result.
    snapshot: Vec<Item>,
    duration_ms: u32,
}

pub struct SpinController {
    current: Roulette,
    saved: Vec<Roulette>,
    phase: SpinPhase,
    cumulative_angle: f64,
    winning_item: Option<Item>,
    pending: Option<PendingSpin>,
    auto_remove_enabled: bool,
    rng: Box<dyn RngCore>,
    clock: Clock,
}

impl SpinController {
    pub fn new(rng: Box<dyn RngCore>, clock: Clock) -> Self {
        let now = clock();
        Self {
            current: Roulette::new("", now),
            saved: Vec::new(),
            phase: SpinPhase::Idle,
            cumulative_angle: 0.0,
            winning_item: None,
            pending: None,
            auto_remove_enabled: false,
            rng,
            clock,
        }
    }

    /// Replaces the saved collection, typically with a decoded storage blob.
    pub fn restore_saved(&mut self, saved: Vec<Roulette>) {
        self.saved = saved;
    }

    pub fn current_roulette(&self) -> &Roulette {
        &self.current
    }

    pub fn items(&self) -> &[Item] {
        &self.current.items
    }

    pub fn saved_roulettes(&self) -> &[Roulette] {
        &self.saved
    }

    pub fn phase(&self) -> SpinPhase {
        self.phase
    }

    pub fn is_spinning(&self) -> bool {
        self.phase == SpinPhase::Spinning
    }

    pub fn cumulative_angle(&self) -> f64 {
        self.cumulative_angle
    }

    pub fn winning_item(&self) -> Option<&Item> {
        self.winning_item.as_ref()
    }

    pub fn auto_remove_enabled(&self) -> bool {
        self.auto_remove_enabled
    }

    pub fn set_auto_remove(&mut self, enabled: bool) {
        self.auto_remove_enabled = enabled;
    }

    /// Duration of the in-flight spin, if one is pending.
    pub fn spin_duration_ms(&self) -> Option<u32> {
        self.pending.as_ref().map(|pending| pending.duration_ms)
    }

    // --- item editing -----------------------------------------------------

    pub fn add_item(&mut self, label: &str) {
        let now = (self.clock)();
        self.current.add_item(label, now);
    }

    pub fn remove_item(&mut self, id: Uuid) {
        let now = (self.clock)();
        if self.current.remove_item(id, now) {
            // A result pointing at a removed item should not linger.
            if self.winning_item.as_ref().is_some_and(|item| item.id == id) {
                self.winning_item = None;
            }
        }
    }

    pub fn update_item(&mut self, id: Uuid, label: &str) {
        let now = (self.clock)();
        if self.current.update_item(id, label, now) {
            if let Some(winner) = self.winning_item.as_mut().filter(|item| item.id == id) {
                winner.label = label.trim().to_string();
            }
        }
    }

    pub fn clear_items(&mut self) {
        let now = (self.clock)();
        self.current.clear_items(now);
        self.winning_item = None;
    }

    pub fn clear_result(&mut self) {
        self.winning_item = None;
    }

    // --- spinning ---------------------------------------------------------

    /// Starts a spin. No-op (`None`) while a spin is in flight or with an
    /// empty wheel. A single-item wheel resolves immediately: the one item
    /// always wins and the wheel never enters the Spinning phase.
    pub fn start_spin(&mut self) -> Option<SpinPlan> {
        if self.phase == SpinPhase::Spinning {
            return None;
        }
        let count = self.current.items.len();
        if count == 0 {
            return None;
        }
        if count == 1 {
            let winner = self.current.items[0].clone();
            self.publish_winner(winner);
            return None;
        }

        let target = self.rng.gen_range(0..count);
        let final_angle =
            wheel::angle_for_target(target, count, self.cumulative_angle, self.rng.as_mut());
        let duration_ms = wheel::spin_duration_ms(self.rng.as_mut());

        self.cumulative_angle = final_angle;
        self.winning_item = None;
        self.phase = SpinPhase::Spinning;
        self.pending = Some(PendingSpin {
            target,
            snapshot: self.current.items.clone(),
            duration_ms,
        });

        Some(SpinPlan {
            final_angle,
            duration_ms,
        })
    }

    /// Reveals the result of the in-flight spin. The landed index is
    /// recomputed from the published angle; disagreement with the committed
    /// target means the mapper and the renderer no longer share a
    /// convention, which is logged and recovered by trusting the target.
    pub fn settle(&mut self) -> Option<Item> {
        if self.phase != SpinPhase::Spinning {
            return None;
        }
        let pending = self.pending.take()?;
        self.phase = SpinPhase::Idle;

        let mut landed = wheel::index_for_angle(self.cumulative_angle, pending.snapshot.len());
        if landed != pending.target {
            log::error!(
                "wheel settled on index {landed} but index {} was committed at spin start; \
                 trusting the committed index",
                pending.target
            );
            landed = pending.target;
        }

        let winner = pending.snapshot[landed].clone();
        self.publish_winner(winner.clone());
        Some(winner)
    }

    fn publish_winner(&mut self, winner: Item) {
        // The flag is read here, at settle time; toggles during the spin
        // apply to this cleanup.
        if self.auto_remove_enabled {
            let now = (self.clock)();
            self.current.remove_item(winner.id, now);
        }
        self.winning_item = Some(winner);
    }

    fn abort_spin(&mut self) {
        self.pending = None;
        self.phase = SpinPhase::Idle;
    }

    // --- session / persistence boundary -----------------------------------

    /// Replaces the current roulette with a fresh, empty one.
    pub fn create_new(&mut self, name: &str) {
        let now = (self.clock)();
        self.abort_spin();
        self.current = Roulette::new(name, now);
        self.winning_item = None;
    }

    /// Upserts the current roulette into the saved collection, optionally
    /// renaming it first. The caller persists the collection afterwards.
    pub fn save_current(&mut self, name: &str) {
        let now = (self.clock)();
        self.current.rename(name, now);
        match self.saved.iter_mut().find(|r| r.id == self.current.id) {
            Some(slot) => *slot = self.current.clone(),
            None => self.saved.push(self.current.clone()),
        }
    }

    /// Loads a saved roulette wholesale, discarding any in-flight spin and
    /// the previous result. Unknown ids are a no-op.
    pub fn load(&mut self, id: Uuid) -> bool {
        let Some(roulette) = self.saved.iter().find(|r| r.id == id).cloned() else {
            return false;
        };
        self.abort_spin();
        self.current = roulette;
        self.winning_item = None;
        true
    }

    /// Deletes a saved roulette. Deleting the one currently loaded resets
    /// the session to a fresh roulette.
    pub fn delete_saved(&mut self, id: Uuid) -> bool {
        let before = self.saved.len();
        self.saved.retain(|r| r.id != id);
        if self.saved.len() == before {
            return false;
        }
        if self.current.id == id {
            self.create_new("");
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rand::rngs::mock::StepRng;
    use std::collections::HashMap;

    fn controller_with(labels: &[&str]) -> SpinController {
        let rng = Box::new(SmallRng::seed_from_u64(42));
        let mut controller = SpinController::new(rng, Box::new(|| 1_000));
        for label in labels {
            controller.add_item(label);
        }
        controller
    }

    fn spin_once(controller: &mut SpinController) -> Item {
        let plan = controller.start_spin().expect("spin should start");
        assert!(controller.is_spinning());
        assert!(controller.winning_item().is_none());
        assert_eq!(controller.cumulative_angle(), plan.final_angle);
        controller.settle().expect("spin should settle")
    }

    #[test]
    fn spin_with_no_items_is_a_no_op() {
        let mut controller = controller_with(&[]);
        assert!(controller.start_spin().is_none());
        assert_eq!(controller.phase(), SpinPhase::Idle);
        assert!(controller.winning_item().is_none());
    }

    #[test]
    fn spin_with_one_item_resolves_immediately() {
        let mut controller = controller_with(&["Only"]);
        assert!(controller.start_spin().is_none());
        assert_eq!(controller.phase(), SpinPhase::Idle);
        assert_eq!(controller.winning_item().unwrap().label, "Only");
        assert_eq!(controller.cumulative_angle(), 0.0);
    }

    #[test]
    fn second_start_while_spinning_is_a_no_op() {
        let mut controller = controller_with(&["A", "B", "C"]);
        let plan = controller.start_spin().expect("first spin starts");
        let angle = controller.cumulative_angle();
        assert!(controller.start_spin().is_none());
        assert_eq!(controller.cumulative_angle(), angle);
        assert_eq!(controller.cumulative_angle(), plan.final_angle);
        let winner = controller.settle().unwrap();
        assert!(controller.items().iter().any(|item| item.id == winner.id));
    }

    #[test]
    fn settle_without_a_spin_is_a_no_op() {
        let mut controller = controller_with(&["A", "B"]);
        assert!(controller.settle().is_none());
    }

    #[test]
    fn cumulative_angle_is_strictly_increasing() {
        let mut controller = controller_with(&["A", "B", "C", "D", "E"]);
        let mut last = controller.cumulative_angle();
        for _ in 0..50 {
            spin_once(&mut controller);
            let angle = controller.cumulative_angle();
            assert!(angle > last);
            last = angle;
        }
    }

    #[test]
    fn winner_comes_from_the_spin_start_snapshot() {
        let mut controller = controller_with(&["A", "B", "C"]);
        let start_ids: Vec<_> = controller.items().iter().map(|item| item.id).collect();
        controller.start_spin().unwrap();
        controller.add_item("added mid-spin");
        let winner = controller.settle().unwrap();
        assert!(start_ids.contains(&winner.id));
    }

    #[test]
    fn auto_remove_deletes_the_winner_from_the_list() {
        let mut controller = controller_with(&["A", "B", "C"]);
        controller.set_auto_remove(true);
        let winner = spin_once(&mut controller);
        assert_eq!(controller.items().len(), 2);
        assert!(!controller.current_roulette().contains(winner.id));
        // The published result stays displayable after the removal.
        assert_eq!(controller.winning_item().unwrap().id, winner.id);
    }

    #[test]
    fn manual_remove_keeps_the_list_unchanged() {
        let mut controller = controller_with(&["A", "B", "C"]);
        let winner = spin_once(&mut controller);
        assert_eq!(controller.items().len(), 3);
        assert!(controller.current_roulette().contains(winner.id));
    }

    #[test]
    fn auto_remove_flag_is_read_at_settle_time() {
        let mut controller = controller_with(&["A", "B", "C"]);
        controller.start_spin().unwrap();
        controller.set_auto_remove(true);
        controller.settle().unwrap();
        assert_eq!(controller.items().len(), 2);
    }

    #[test]
    fn four_items_win_roughly_uniformly() {
        let mut controller = controller_with(&["A", "B", "C", "D"]);
        let mut wins: HashMap<String, u32> = HashMap::new();
        for _ in 0..10_000 {
            let winner = spin_once(&mut controller);
            *wins.entry(winner.label).or_default() += 1;
        }
        for label in ["A", "B", "C", "D"] {
            let count = wins.get(label).copied().unwrap_or(0);
            assert!(
                (2_000..=3_000).contains(&count),
                "{label} won {count} of 10000 spins"
            );
        }
    }

    #[test]
    fn deterministic_rng_gives_a_deterministic_winner() {
        // StepRng always yields the low end of a range, so the target is
        // index 0 and the minimum turn count is used.
        let rng = Box::new(StepRng::new(0, 0));
        let mut controller = SpinController::new(rng, Box::new(|| 0));
        for label in ["A", "B", "C", "D"] {
            controller.add_item(label);
        }
        let plan = controller.start_spin().unwrap();
        assert_eq!(wheel::index_for_angle(plan.final_angle, 4), 0);
        assert_eq!(controller.settle().unwrap().label, "A");
    }

    #[test]
    fn removing_the_winner_clears_the_result() {
        let mut controller = controller_with(&["A", "B", "C"]);
        let winner = spin_once(&mut controller);
        controller.remove_item(winner.id);
        assert!(controller.winning_item().is_none());
        assert_eq!(controller.items().len(), 2);
    }

    #[test]
    fn relabeling_the_winner_updates_the_result() {
        let mut controller = controller_with(&["A", "B"]);
        let winner = spin_once(&mut controller);
        controller.update_item(winner.id, "renamed");
        assert_eq!(controller.winning_item().unwrap().label, "renamed");
    }

    #[test]
    fn save_and_load_round_trip_by_id() {
        let mut controller = controller_with(&["A", "B"]);
        controller.save_current("Lunch");
        let saved_id = controller.saved_roulettes()[0].id;

        controller.create_new("scratch");
        controller.add_item("X");
        assert_eq!(controller.items().len(), 1);

        assert!(controller.load(saved_id));
        let labels: Vec<_> = controller.items().iter().map(|i| i.label.clone()).collect();
        assert_eq!(labels, vec!["A", "B"]);
        assert_eq!(controller.current_roulette().name, "Lunch");
    }

    #[test]
    fn saving_twice_updates_in_place() {
        let mut controller = controller_with(&["A"]);
        controller.save_current("First");
        controller.add_item("B");
        controller.save_current("Second");
        assert_eq!(controller.saved_roulettes().len(), 1);
        assert_eq!(controller.saved_roulettes()[0].name, "Second");
        assert_eq!(controller.saved_roulettes()[0].items.len(), 2);
    }

    #[test]
    fn load_discards_an_in_flight_spin() {
        let mut controller = controller_with(&["A", "B"]);
        controller.save_current("Lunch");
        let saved_id = controller.saved_roulettes()[0].id;

        controller.start_spin().unwrap();
        assert!(controller.is_spinning());
        assert!(controller.load(saved_id));
        assert_eq!(controller.phase(), SpinPhase::Idle);
        assert!(controller.winning_item().is_none());
        // The stale settle callback finds nothing to do.
        assert!(controller.settle().is_none());
    }

    #[test]
    fn deleting_the_loaded_roulette_resets_the_session() {
        let mut controller = controller_with(&["A", "B"]);
        controller.save_current("Lunch");
        let saved_id = controller.saved_roulettes()[0].id;
        assert!(controller.delete_saved(saved_id));
        assert!(controller.saved_roulettes().is_empty());
        assert!(controller.items().is_empty());
        assert_ne!(controller.current_roulette().id, saved_id);
    }

    #[test]
    fn deleting_an_unknown_id_is_a_no_op() {
        let mut controller = controller_with(&["A"]);
        controller.save_current("Lunch");
        assert!(!controller.delete_saved(Uuid::new_v4()));
        assert_eq!(controller.saved_roulettes().len(), 1);
    }
}
