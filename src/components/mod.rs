//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod delete_item_form;
mod filter_bar;
mod item_card;
mod item_list;
mod log_panel;
mod new_item_form;
mod notify_button;
mod quantity_editor;
mod toast_host;

pub use delete_confirm_button::DeleteConfirmButton;
pub use delete_item_form::DeleteItemForm;
pub use filter_bar::FilterBar;
pub use item_card::ItemCard;
pub use item_list::ItemList;
pub use log_panel::LogPanel;
pub use new_item_form::NewItemForm;
pub use notify_button::NotifyButton;
pub use quantity_editor::QuantityEditor;
pub use toast_host::ToastHost;
