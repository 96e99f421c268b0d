use console::Style;
use once_cell::sync::Lazy;

pub static HEADER: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static INDEX: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static MUTED: Lazy<Style> = Lazy::new(|| Style::new().color256(246).italic());
pub static DIRTY: Lazy<Style> = Lazy::new(|| Style::new().yellow().bold());
pub static LOCKED: Lazy<Style> = Lazy::new(|| Style::new().red().dim());
pub static BADGE: Lazy<Style> = Lazy::new(|| Style::new().cyan());
