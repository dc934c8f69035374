//! Terminal output formatting.

use colored::{Color, ColoredString, Colorize};
use grocer_core::{
    color_for, icon_for, CategoryBucket, GroceryItem, GroupedItems, ListStats, ShoppingList,
};
use unicode_width::UnicodeWidthStr;

/// Print the banner for a shared list.
pub fn print_list_header(list: &ShoppingList) {
    println!(
        "{} {}",
        list.name.cyan().bold(),
        format!("[shared: {}]", list.share_code).dimmed()
    );
    println!();
}

/// Print grouped items followed by a stats line.
pub fn print_grouped(grouped: &GroupedItems, stats: ListStats) {
    if grouped.is_empty() {
        println!(
            "{}",
            "No items yet. Add one with 'grocer item add <list-id> <name>'.".dimmed()
        );
        return;
    }

    let term_w = term_width();
    for bucket in &grouped.buckets {
        print_bucket(bucket, term_w);
    }

    println!(
        " {} {} items {} {} bought {} {} remaining",
        "■".cyan(),
        stats.total.to_string().bold(),
        "·".dimmed(),
        stats.bought.to_string().green(),
        "·".dimmed(),
        stats.remaining().to_string().yellow()
    );
}

/// Print one category bucket: colored header, then its items.
fn print_bucket(bucket: &CategoryBucket, term_w: usize) {
    let glyph = icon_glyph(icon_for(&bucket.category));
    let header = format!("{} {}", glyph, bucket.category);
    println!(
        " {} {}",
        header.color(token_color(color_for(&bucket.category))).bold(),
        format!("({})", bucket.items.len()).dimmed()
    );

    // Align the quantity column on the longest name in the bucket.
    let name_w = bucket
        .items
        .iter()
        .map(|item| UnicodeWidthStr::width(item.name.as_str()))
        .max()
        .unwrap_or(0)
        .min(term_w.saturating_sub(18).max(8));

    for item in &bucket.items {
        print_item_line(item, name_w);
    }
    println!();
}

fn print_item_line(item: &GroceryItem, name_w: usize) {
    let marker: ColoredString = if item.bought {
        "✓".green().bold()
    } else {
        "·".dimmed()
    };

    let truncated = truncate_visual(&item.name, name_w);
    let padding = " ".repeat(name_w.saturating_sub(UnicodeWidthStr::width(truncated.as_str())));
    let name: ColoredString = if item.bought {
        truncated.strikethrough().dimmed()
    } else {
        truncated.normal()
    };

    let qty = pad_right(&format!("×{}", item.quantity), 4);

    println!(
        "   {} {}{} {} {}",
        marker,
        name,
        padding,
        qty.dimmed(),
        format!("#{}", item.id).dimmed()
    );
}

/// Map a registry color token to a terminal color.
fn token_color(token: &str) -> Color {
    match token {
        "category-dairy" => Color::Blue,
        "category-fruits" => Color::BrightRed,
        "category-vegetables" => Color::Green,
        "category-protein" => Color::Red,
        "category-grains" => Color::Yellow,
        "category-snacks" => Color::Magenta,
        _ => Color::BrightBlack,
    }
}

/// Map a registry icon identifier to a glyph.
fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "milk" => "🥛",
        "apple" => "🍎",
        "carrot" => "🥕",
        "beef" => "🥩",
        "wheat" => "🌾",
        "cookie" => "🍪",
        "package" => "📦",
        _ => "🧺",
    }
}

/// Get terminal width, defaulting to 80.
fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// Pad a plain string to a given visual width (right-padded).
fn pad_right(s: &str, width: usize) -> String {
    let visual = UnicodeWidthStr::width(s);
    if visual >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visual))
    }
}

/// Truncate a string respecting visual width.
fn truncate_visual(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut result = String::new();
    let mut current_width = 0;
    for ch in s.chars() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + ch_width > max_width - 2 {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }
    result.push_str("..");
    result
}
