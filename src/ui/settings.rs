//! Hardcoded prompt strings, labels, and colors for the terminal interface.

use crossterm::style::Color;

pub const PROMPT_DOMAIN: &str = "Enter shopify domain (<domain>.myshopify.com): ";
pub const PROMPT_ACCESS_TOKEN: &str = "Enter Access Token / Password: ";
pub const PROMPT_ORDER_QUERY: &str = "Enter Order Query: ";

pub const MSG_NOT_FOUND: &str = "Did not find any order.";
pub const MSG_DONE: &str = "Done.";

pub const LABEL_WARNING: &str = "warning:";
pub const LABEL_ERROR: &str = "error:";

pub const COLOR_PROMPT: Color = Color::Cyan;
pub const COLOR_ACTIVITY: Color = Color::DarkGrey;
pub const COLOR_WARNING: Color = Color::Yellow;
pub const COLOR_ERROR: Color = Color::Red;
