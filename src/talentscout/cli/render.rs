//! Turns command results into terminal text. Everything here returns a
//! `String` so the one-shot commands and the shell share it.

use super::styles::{BADGE, DIRTY, HEADER, INDEX, LOCKED, MUTED};
use colored::Colorize;
use talentscout::api::{
    CmdMessage, CmdResult, DimensionInfo, DimensionStatus, FacetList, MessageLevel,
};
use talentscout::filter::Section;
use talentscout::model::Influencer;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 22;
const PLATFORM_WIDTH: usize = 24;
const PLACE_WIDTH: usize = 24;

pub(super) fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages));
}

/// Header, one line per record, and the page footer.
pub(super) fn render_results(result: &CmdResult) -> String {
    let mut out = String::new();
    if let Some(header) = &result.header {
        out.push_str(&format!("{}\n", HEADER.apply_to(header)));
    }
    for (i, record) in result.listed.iter().enumerate() {
        out.push_str(&render_record(i + 1, record));
        out.push('\n');
    }
    if let Some(page) = &result.page {
        if page.page_count > 1 {
            let footer = format!("Page {} of {}", page.index + 1, page.page_count);
            out.push_str(&format!("{}\n", MUTED.apply_to(footer)));
        }
    }
    out
}

fn render_record(n: usize, record: &Influencer) -> String {
    let idx = format!("{:>3}. ", n);
    let name = pad_to_width(&truncate_to_width(&record.name, NAME_WIDTH), NAME_WIDTH);
    let platform = pad_to_width(
        &truncate_to_width(record.platform_label(), PLATFORM_WIDTH),
        PLATFORM_WIDTH,
    );
    let place = format!("{}, {}", record.location.city, record.location.country_code);
    let place = pad_to_width(&truncate_to_width(&place, PLACE_WIDTH), PLACE_WIDTH);
    let badges: Vec<String> = record.badges.iter().map(|b| b.to_string()).collect();

    let mut line = format!(
        "{}{} {} {:>7} {:>6} {} {:.1}",
        INDEX.apply_to(idx),
        name,
        platform,
        record.followers_display(),
        format!("${}", record.price_usd),
        place,
        record.rating
    );
    if !badges.is_empty() {
        line.push_str(&format!("  {}", BADGE.apply_to(badges.join(", "))));
    }
    line
}

pub(super) fn render_status(rows: &[DimensionStatus], open: &[Section]) -> String {
    let width = rows
        .iter()
        .map(|r| r.dimension.name().width())
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for row in rows {
        let name = pad_to_width(row.dimension.name(), width);
        let mut line = format!("  {}  {}", name, row.committed);
        if row.dirty {
            line.push_str(&format!(
                "  {}",
                DIRTY.apply_to(format!("-> {} (unsaved)", row.pending))
            ));
        }
        if row.locked {
            line.push_str(&format!("  {}", LOCKED.apply_to("locked")));
        }
        out.push_str(&line);
        out.push('\n');
    }
    if !open.is_empty() {
        let titles: Vec<&str> = open.iter().map(|s| s.title()).collect();
        out.push_str(&format!(
            "{}\n",
            MUTED.apply_to(format!("Open: {}", titles.join(", ")))
        ));
    }
    out
}

pub(super) fn render_facets(facets: &[FacetList]) -> String {
    let mut out = String::new();
    for (i, facet) in facets.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("{}\n", HEADER.apply_to(facet.dimension.spec().title)));
        for option in facet.options {
            out.push_str(&format!("  {}\n", option));
        }
    }
    out
}

pub(super) fn render_dimensions(dimensions: &[DimensionInfo]) -> String {
    let mut out = String::new();
    for info in dimensions {
        let mut line = format!(
            "{:<12} {:<10} {:<20}",
            info.dimension.name(),
            info.kind,
            info.section
        );
        line.push_str(&format!(" default {:<16} open {}", info.default, info.open));
        if info.premium {
            line.push_str(&format!("  {}", LOCKED.apply_to("premium")));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

pub(super) fn render_text_list(lines: &[String], empty_message: &str) -> String {
    if lines.is_empty() {
        return format!("{}\n", empty_message);
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
