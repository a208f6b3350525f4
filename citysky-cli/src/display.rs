use citysky_core::{Theme, ViewState, render};
use colored::Colorize;

const MIN_WIDTH: usize = 44;

/// Prints rendered views, painting the theme as a background panel.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    colored: bool,
}

impl Painter {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    pub fn print(&self, view: &ViewState) {
        println!("{}", self.paint(&render(view), view.theme));
    }

    /// Every painted line ends with a reset, so the theme never leaks past
    /// the panel.
    pub fn paint(&self, text: &str, theme: Theme) -> String {
        if !self.colored {
            return text.to_string();
        }

        let width = text.lines().map(|l| l.chars().count()).max().unwrap_or(0).max(MIN_WIDTH);
        let (r, g, b) = theme.rgb();
        let (fr, fg, fb) = foreground_for((r, g, b));

        text.lines()
            .map(|line| {
                let padded = format!(" {line:<width$} ");
                padded.on_truecolor(r, g, b).truecolor(fr, fg, fb).to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Black text on light backgrounds, white on dark ones.
fn foreground_for((r, g, b): (u8, u8, u8)) -> (u8, u8, u8) {
    let luma = 0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b);
    if luma < 140.0 { (255, 255, 255) } else { (0, 0, 0) }
}
