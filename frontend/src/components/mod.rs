pub mod header;
pub mod item_form;
pub mod items_list;
pub mod load_dialog;
pub mod save_dialog;
pub mod settings_panel;
pub mod spin_result;
pub mod wheel_canvas;

pub use header::Header;
pub use item_form::ItemForm;
pub use items_list::ItemsList;
pub use load_dialog::LoadDialog;
pub use save_dialog::SaveDialog;
pub use settings_panel::SettingsPanel;
pub use spin_result::SpinResult;
pub use wheel_canvas::WheelCanvas;
