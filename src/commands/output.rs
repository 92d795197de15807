//! @acp:module "Output Formatting"
//! @acp:summary "Notification lines and answer formatting for terminal output"
//! @acp:domain cli
//! @acp:layer handler

use console::style;

use crate::registry::Section;

/// `✓ message` on stdout
pub fn success(message: impl AsRef<str>) {
    println!("{} {}", style("✓").green(), message.as_ref());
}

/// `✗ message` on stderr
pub fn failure(message: impl AsRef<str>) {
    eprintln!("{} {}", style("✗").red(), message.as_ref());
}

/// `→ message` for progress steps
pub fn step(message: impl AsRef<str>) {
    println!("{} {}", style("→").cyan(), message.as_ref());
}

/// `⚠ message` on stderr
pub fn warning(message: impl AsRef<str>) {
    eprintln!("{} {}", style("⚠").yellow(), message.as_ref());
}

/// Bold section heading with its field ids
pub fn section_heading(section: &Section) {
    println!(
        "\n{} {}",
        style(section.title).bold().underlined(),
        style(format!("({} / {})", section.what(), section.how())).dim()
    );
}

/// Indented value, or a dim marker when blank
pub fn answer_block(value: &str) -> String {
    if value.trim().is_empty() {
        return format!("    {}", style("(no response)").dim());
    }
    value
        .lines()
        .map(|line| format!("    {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Text progress bar, e.g. `[██████░░░░░░░░░░░░░░]`
pub fn progress_bar(percent: u8, width: usize) -> String {
    let filled = (usize::from(percent.min(100)) * width + 50) / 100;
    format!("[{}{}]", "█".repeat(filled), "░".repeat(width - filled))
}
