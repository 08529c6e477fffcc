//! Marten CLI
//!
//! Styles and lays out a document description from the command line.
//!
//! The document comes in as JSON (the form a markup parser hands over, see
//! [`DocumentDescription`]); stylesheets come from `--css` files and any
//! `<style>` elements in the document.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use marten_common::warning::clear_warnings;
use marten_css::cascade::StyleTree;
use marten_css::parser::Stylesheet;
use marten_css::text::FixedWidthMetrics;
use marten_css::{
    Cascade, LayoutConfig, PropertyRegistry, extract_style_content, layout_document,
    parse_stylesheet, ua_stylesheet,
};
use marten_dom::{DocumentDescription, DomTree};
use owo_colors::OwoColorize;

/// Marten: CSS styling and layout for a document description
#[derive(Parser, Debug)]
#[command(name = "marten")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Lay out a document with one stylesheet
    marten page.json --css site.css

    # Inline document, narrow viewport
    marten --inline '{"children":[{"tag":"p","children":["hello"]}]}' --width 320

    # Print resolved declarations instead of only the box tree
    marten page.json --css site.css --styles

    # Box tree as JSON
    marten page.json --json
"#)]
struct Cli {
    /// Path to a JSON document description
    #[arg(value_name = "FILE")]
    path: Option<PathBuf>,

    /// JSON document description given directly instead of a file
    #[arg(long, value_name = "JSON", conflicts_with = "path")]
    inline: Option<String>,

    /// Author stylesheet; may be repeated, later sheets win ties
    #[arg(long, value_name = "FILE")]
    css: Vec<PathBuf>,

    /// Viewport width in px
    #[arg(long, default_value = "800")]
    width: f32,

    /// Viewport height in px
    #[arg(long, default_value = "600")]
    height: f32,

    /// Device pixels per inch for physical units
    #[arg(long, default_value = "96")]
    dpi: f32,

    /// Size of `font-size: medium` in px
    #[arg(long, default_value = "16")]
    font_size: f32,

    /// Character advance as a fraction of the font size
    #[arg(long, default_value_t = FixedWidthMetrics::DEFAULT_EM_RATIO)]
    em_ratio: f32,

    /// Skip the user-agent stylesheet
    #[arg(long)]
    no_ua: bool,

    /// Print the box tree as JSON
    #[arg(long)]
    json: bool,

    /// Print the declared values of every element before the box tree
    #[arg(long)]
    styles: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    clear_warnings();

    let dom = load_document(&cli)?;
    let registry = PropertyRegistry::init();
    let sheets = load_stylesheets(&cli.css, &dom, &registry)?;
    for (origin, sheet) in &sheets {
        report_errors(origin, sheet);
    }

    let ua = ua_stylesheet(&registry);
    let mut cascade = Cascade::new(&registry);
    if !cli.no_ua {
        cascade = cascade.with_user_agent(&ua);
    }
    let author: Vec<&Stylesheet> = sheets.iter().map(|(_, sheet)| sheet).collect();
    let styles = cascade.resolve_sheets(&dom, &author);

    if cli.styles {
        println!("{}", "=== Styles ===".bold());
        print_styles(&dom, &styles);
        println!();
    }

    let config = LayoutConfig {
        viewport_width: cli.width,
        viewport_height: cli.height,
        dpi: cli.dpi,
        default_font_size: cli.font_size,
    };
    let metrics = FixedWidthMetrics::new(cli.em_ratio);
    let tree = layout_document(&dom, &styles, &config, &metrics);

    if cli.json {
        let json = serde_json::to_string_pretty(&tree).context("serializing the box tree")?;
        println!("{json}");
    } else {
        println!(
            "{}",
            format!("=== Box Tree (viewport: {}x{}) ===", cli.width, cli.height).bold()
        );
        print!("{}", tree.dump(&dom));
    }
    Ok(())
}

/// Build the document from `--inline` or the positional path.
fn load_document(cli: &Cli) -> Result<DomTree> {
    let description: DocumentDescription = if let Some(json) = &cli.inline {
        serde_json::from_str(json).context("parsing --inline document")?
    } else if let Some(path) = &cli.path {
        let text = read(path)?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing document {}", path.display()))?
    } else {
        bail!("a document path or --inline JSON is required")
    };
    Ok(DomTree::from_description(&description))
}

/// `--css` files in order, then the document's own `<style>` content.
fn load_stylesheets(
    paths: &[PathBuf],
    dom: &DomTree,
    registry: &PropertyRegistry,
) -> Result<Vec<(String, Stylesheet)>> {
    let mut sheets = Vec::with_capacity(paths.len() + 1);
    for path in paths {
        let css = read(path)?;
        sheets.push((path.display().to_string(), parse_stylesheet(&css, registry)));
    }
    let embedded = extract_style_content(dom);
    if !embedded.trim().is_empty() {
        sheets.push(("<style>".to_owned(), parse_stylesheet(&embedded, registry)));
    }
    Ok(sheets)
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn report_errors(origin: &str, sheet: &Stylesheet) {
    for error in &sheet.errors {
        eprintln!("{} {error}", format!("{origin}:").yellow());
    }
}

/// Each element's tag and winning declarations, indented by depth.
fn print_styles(dom: &DomTree, styles: &StyleTree) {
    for (_, style) in styles.iter() {
        let Some(element) = dom.as_element(style.node) else {
            continue;
        };
        let depth = dom.ancestors(style.node).count().saturating_sub(1);
        let indent = "  ".repeat(depth);
        println!("{indent}{}", format!("<{}>", element.tag_name).cyan());
        for (property, entry) in style.declared().iter() {
            let important = if entry.important { " !important" } else { "" };
            println!("{indent}  {property}: {}{important}", entry.value);
        }
    }
}
