//! Terminal renderer: prints core output with ANSI color coding

use emc2_core::RenderSink;
use emc2_types::{Comparison, ConversionMode, MagnitudeClass};

const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// Renders results, comparisons, and facts to stdout
pub struct TerminalRenderer {
    use_color: bool,
    title: &'static str,
}

impl TerminalRenderer {
    pub fn new(use_color: bool) -> Self {
        Self {
            use_color,
            title: ConversionMode::default().result_title(),
        }
    }

    /// Update the headline shown above results ("Energy Equivalent" or
    /// "Mass Equivalent")
    pub fn set_mode(&mut self, mode: ConversionMode) {
        self.title = mode.result_title();
    }

    pub fn show_banner(&self) {
        println!("E = mc² explorer — type a number, 'mode', 'unit <symbol>', or 'help'");
    }

    pub fn show_help(&self) {
        println!("Commands:");
        println!("  <number>        recalculate with a new input value");
        println!("  mode            toggle between mass→energy and energy→mass");
        println!("  mode mass       convert mass to energy");
        println!("  mode energy     convert energy to mass");
        println!("  unit <symbol>   select a unit: kg, g, lbs, J, kT, kWh");
        println!("  fact            restart fact rotation and show a fact now");
        println!("  save            remember the current mode and units");
        println!("  help            this text");
        println!("  quit            exit");
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.use_color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn magnitude_color(magnitude: MagnitudeClass) -> &'static str {
        // Same coding as the classic widget: high red, medium yellow, low cyan
        match magnitude {
            MagnitudeClass::High => RED,
            MagnitudeClass::Medium => YELLOW,
            MagnitudeClass::Low => CYAN,
        }
    }

    /// One comparison row. With color the magnitude is carried by the row
    /// color; without it the class is spelled out as a trailing tag.
    fn comparison_line(&self, item: &Comparison, width: usize) -> String {
        let line = format!("  {:width$}  {}", item.name, item.ratio_text);
        if self.use_color {
            self.paint(Self::magnitude_color(item.magnitude), &line)
        } else {
            format!("{line} [{}]", item.magnitude.as_str())
        }
    }
}

impl RenderSink for TerminalRenderer {
    fn on_result(&mut self, text: &str) {
        println!();
        println!("{}", self.paint(BOLD, self.title));
        println!("  {text}");
    }

    fn on_comparison(&mut self, items: &[Comparison]) {
        println!();
        println!("{}", self.paint(BOLD, "Compared to:"));
        let width = items.iter().map(|c| c.name.len()).max().unwrap_or(0);
        for item in items {
            println!("{}", self.comparison_line(item, width));
        }
    }

    fn on_fact(&mut self, text: &str) {
        println!();
        println!("{}", self.paint(DIM, &format!("Did you know? {text}")));
    }
}
