//! Palette and shared surface classes, installed once as a global style.

pub const BASE: &str = "#07070A";
pub const PANEL: &str = "rgba(17, 17, 24, 0.65)";
pub const PURPLE: &str = "#7B5CFF";
pub const BLUE: &str = "#38B6FF";
pub const PINK: &str = "#FF4FD8";

pub const GLOW: &str = "0 0 30px rgba(123, 92, 255, 0.35)";
pub const GLOW_BLUE: &str = "0 0 30px rgba(56, 182, 255, 0.3)";
pub const GLOW_PINK: &str = "0 0 24px rgba(255, 79, 216, 0.25)";

pub const NEON_GRID: &str = "radial-gradient(circle at 20% 20%, rgba(123,92,255,0.2), transparent 40%), \
radial-gradient(circle at 80% 30%, rgba(56,182,255,0.16), transparent 35%), \
radial-gradient(circle at 50% 85%, rgba(255,79,216,0.14), transparent 40%)";

const TOKENS: [(&str, &str); 9] = [
    ("--base", BASE),
    ("--panel", PANEL),
    ("--purple", PURPLE),
    ("--blue", BLUE),
    ("--pink", PINK),
    ("--glow", GLOW),
    ("--glow-blue", GLOW_BLUE),
    ("--glow-pink", GLOW_PINK),
    ("--neon-grid", NEON_GRID),
];

/// The body of the global stylesheet. Keyframes and media queries live in
/// the page's own `<style>` block.
pub fn global_css() -> String {
    let mut css = String::from(":root {\n");
    for (name, value) in TOKENS {
        css.push_str(&format!("    {}: {};\n", name, value));
    }
    css.push_str("}\n");
    css.push_str(
        r#"
html, body {
    margin: 0;
    background: var(--base);
    color: #f1f5f9;
    font-family: "Inter", "Segoe UI", system-ui, sans-serif;
}
*, *::before, *::after {
    box-sizing: border-box;
}
a {
    color: inherit;
}
.glass {
    background: var(--panel);
    border: 1px solid rgba(255, 255, 255, 0.08);
    backdrop-filter: blur(20px);
    -webkit-backdrop-filter: blur(20px);
}
.neon-border {
    border: 1px solid rgba(123, 92, 255, 0.45);
    box-shadow: var(--glow), inset 0 0 20px rgba(56, 182, 255, 0.08);
}
.ambient-bg {
    position: fixed;
    inset: 0;
    z-index: 0;
    pointer-events: none;
    background-image: var(--neon-grid);
}
.shadow-glow {
    box-shadow: var(--glow);
}
.shadow-glow-blue {
    box-shadow: var(--glow-blue);
}
.shadow-glow-pink {
    box-shadow: var(--glow-pink);
}
"#,
    );
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_token_is_declared_once() {
        let css = global_css();
        for (name, value) in TOKENS {
            let declaration = format!("{}: {};", name, value);
            assert_eq!(css.matches(&declaration).count(), 1, "{}", name);
        }
    }

    #[test]
    fn global_sheet_has_no_at_rules() {
        assert!(!global_css().contains('@'));
    }
}
