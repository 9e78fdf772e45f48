use regcomp::Pattern;

/// Terminal styles used by the report.
#[derive(Clone, Copy)]
enum Style {
    Name,
    Label,
    Banner,
    Source,
    Hit,
    Miss,
}

impl Style {
    fn code(self) -> &'static str {
        match self {
            Style::Name => "\x1b[1m",
            Style::Label => "\x1b[2m",
            Style::Banner => "\x1b[90m",
            Style::Source => "\x1b[36m",
            Style::Hit => "\x1b[32m",
            Style::Miss => "\x1b[33m",
        }
    }
}

struct Palette {
    enabled: bool,
}

impl Palette {
    fn paint(&self, style: Style, s: impl AsRef<str>) -> String {
        if self.enabled { format!("{}{}\x1b[0m", style.code(), s.as_ref()) } else { s.as_ref().to_string() }
    }

    /// Bytes the escape codes add, so padded columns still line up.
    fn overhead(&self, style: Style) -> usize {
        self.paint(style, "").len()
    }
}

/// Print every definition, then the final pattern and (optionally) its match.
pub fn print_run(defined: &[(String, Pattern)], input: Option<&str>, color: bool) {
    let palette = Palette { enabled: color };

    println!("\n{}", palette.paint(Style::Banner, "━━━ Definitions ━━━"));
    let width = defined.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    for (name, pattern) in defined {
        let padded = width + palette.overhead(Style::Name);
        println!("  {:padded$}  {}", palette.paint(Style::Name, name), pattern);
    }

    let Some((name, pattern)) = defined.last() else {
        return;
    };

    println!("\n{}", palette.paint(Style::Banner, format!("━━━ Pattern: {} ━━━", name)));
    println!("  {} {}", palette.paint(Style::Label, "source:"), palette.paint(Style::Source, pattern.source()));
    println!("  {} \"{}\"", palette.paint(Style::Label, "flags: "), pattern.flags());
    let groups: Vec<&str> = pattern.group_names().iter().map(String::as_str).collect();
    if groups.is_empty() {
        println!("  {} {}", palette.paint(Style::Label, "groups:"), palette.paint(Style::Label, "(none)"));
    } else {
        println!("  {} {}", palette.paint(Style::Label, "groups:"), groups.join(", "));
    }

    let Some(input) = input else {
        return;
    };

    println!("\n{}", palette.paint(Style::Banner, format!("━━━ Match: \"{}\" ━━━", input)));
    match pattern.captures(input) {
        None => println!("  {}", palette.paint(Style::Miss, "no match")),
        Some(caps) => {
            println!("  {} \"{}\"", palette.paint(Style::Hit, "matched"), caps.as_str());
            for (group, text) in caps.iter() {
                match text {
                    Some(text) => println!("    {} = \"{}\"", palette.paint(Style::Name, group), text),
                    None => {
                        let unset = palette.paint(Style::Label, "(unset)");
                        println!("    {} = {}", palette.paint(Style::Name, group), unset)
                    }
                }
            }
        }
    }
}
