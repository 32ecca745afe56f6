//! UI Components
//!
//! Leptos components for the menu screens.

mod delete_confirm_button;
mod header;
mod menu_card;
mod menu_card_skeleton;
mod menu_form;
mod menu_list;
mod not_found_page;
mod product_page;

pub use delete_confirm_button::DeleteConfirmButton;
pub use header::{Footer, Header};
pub use menu_card::MenuCard;
pub use menu_card_skeleton::MenuCardSkeleton;
pub use menu_form::MenuForm;
pub use menu_list::MenuList;
pub use not_found_page::NotFoundPage;
pub use product_page::ProductPage;
