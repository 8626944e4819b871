use botlang::{PassMetrics, ProcessedVerbose, TagMetrics};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run(run: &ProcessedVerbose, color: bool) {
    let palette = ansi::Palette::new(color);
    let out = &run.processed;
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Processing: \"{}\"", out.input), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Clean ━━━", ansi::GRAY));
    println!("  {}", palette.paint(&out.cleaned, ansi::GREEN));

    println!("\n{}", palette.paint("━━━ Replace ━━━", ansi::GRAY));
    print_passes(&run.metrics.passes, &palette);
    println!("  {} {}", palette.dim("result:"), palette.bold(palette.paint(&out.replaced, ansi::GREEN)));

    println!("\n{}", palette.paint("━━━ Tags ━━━", ansi::GRAY));
    if out.tags.is_empty() {
        println!("{}", palette.dim("  No tags"));
    } else {
        print_tags(&run.metrics.tags, &palette);
        println!("  {} {}", palette.dim("all:"), palette.bold(palette.paint(out.tags.join(", "), ansi::GREEN)));
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!(
        "  Total: {}  │  Clean: {}  │  Replace: {}  │  Tag: {}",
        palette.paint(format!("{:?}", run.metrics.total), ansi::GREEN),
        palette.dim(format!("{:?}", run.metrics.clean)),
        palette.paint(format!("{:?}", run.metrics.replace), ansi::CYAN),
        palette.paint(format!("{:?}", run.metrics.tag), ansi::CYAN),
    );
    println!();
}

fn print_passes(passes: &[PassMetrics], palette: &ansi::Palette) {
    for pass in passes {
        let status = if !pass.ran {
            palette.dim("skipped")
        } else if pass.replacements > 0 {
            palette.paint(format!("✓ {} replaced", pass.replacements), ansi::GREEN)
        } else {
            palette.dim("✗ 0 replaced")
        };
        println!(
            "  {} {} {}",
            palette.paint(format!("{:<13}", pass.pass), ansi::BLUE),
            status,
            palette.dim(format!("{:?}", pass.duration))
        );
        if pass.replacements > 0 {
            println!("    {}", palette.paint(&pass.output, ansi::YELLOW));
        }
    }
}

fn print_tags(tables: &[TagMetrics], palette: &ansi::Palette) {
    for table in tables.iter().filter(|t| !t.labels.is_empty()) {
        println!(
            "  {} {} {}",
            palette.paint(format!("{:<16}", table.table), ansi::BLUE),
            palette.paint(table.labels.join(", "), ansi::YELLOW),
            palette.dim(format!("{:?}", table.duration))
        );
    }
}
