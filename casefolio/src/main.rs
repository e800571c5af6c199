//! casefolio - Portfolio case-study scaffolding tool
//!
//! Populates an in-memory design document with the case-study page
//! structure and prints the resulting outline.

#![deny(unsafe_code)]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::all))]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::pedantic))]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(missing_docs))]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

mod cli;

use anyhow::{Context, Result};
use casefolio::catalog;
use casefolio::fonts::SystemFonts;
use casefolio::shell::{self, GenerateRequest, Notification};
use casefolio::{style, Category, DocumentHost, FontName, MemoryDocument, Theme};
use clap::Parser;
use cli::{Cli, Commands};
use itertools::Itertools;

/// Main entry point for the casefolio CLI application
fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

/// Run the CLI application
fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            request,
            title,
            category,
            theme,
            divider,
            clear_existing,
            refresh_placeholders,
            pages,
            runs,
            fonts,
            no_dividers,
            verbose,
        } => {
            let mut request = match request {
                Some(path) => GenerateRequest::load(&path)
                    .with_context(|| format!("Failed to load request {}", path.display()))?,
                None => GenerateRequest::default(),
            };

            // Flags override the request file
            request.title = title.or(request.title);
            request.category = category.or(request.category);
            request.theme = theme.or(request.theme);
            request.divider_style = divider.or(request.divider_style);
            if clear_existing {
                request.clear_existing = Some(true);
            }
            if refresh_placeholders {
                request.refresh_placeholders = Some(true);
            }

            handle_generate_command(request, &pages, runs, fonts, no_dividers, verbose)?;
        }

        Commands::Sections { title, category } => {
            handle_sections_command(&title, category)?;
        }

        Commands::Style { category, theme } => {
            handle_style_command(category, theme);
        }
    }

    Ok(())
}

/// Handle the generate command
fn handle_generate_command(
    request: GenerateRequest,
    pages: &[String],
    runs: usize,
    installed_fonts: Vec<FontName>,
    no_dividers: bool,
    verbose: bool,
) -> Result<()> {
    // Initialize logging if verbose
    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    let mut doc = MemoryDocument::new();
    if no_dividers {
        doc = doc.without_dividers();
    }
    for name in pages {
        doc.create_page(name)
            .with_context(|| format!("Failed to create page '{}'", name))?;
    }

    let mut fonts = if installed_fonts.is_empty() {
        SystemFonts::common()
    } else {
        SystemFonts::new(installed_fonts)
    };

    let options = request.into_options();
    println!("Generating portfolio structure...");
    println!("Title: {}", options.title);
    println!(
        "Category: {}, theme: {:?}, dividers: {:?}",
        options.category.label(),
        options.theme,
        options.divider_style
    );

    for pass in 1..=runs.max(1) {
        if runs > 1 {
            println!("\n[Run {}/{}]", pass, runs);
        }
        match shell::run(&options, &mut doc, &mut fonts) {
            Notification::Success(message) => println!("{}", message),
            Notification::Error(message) => {
                println!("\n{}", doc);
                anyhow::bail!(message);
            }
        }
    }

    println!("\n{}", doc);
    Ok(())
}

/// Handle the sections command
fn handle_sections_command(title: &str, category: Category) -> Result<()> {
    let sections = catalog::sections(title, category.label())
        .context("Failed to parse the embedded section catalog")?;

    println!("Catalog sections:\n");
    for section in &sections {
        let flags = [
            section.is_cover.then_some("cover"),
            section.divider_after.then_some("divider after"),
        ]
        .into_iter()
        .flatten()
        .join(", ");

        println!("  {} - {} ({})", section.id, section.page_name, section.container_name);
        println!("    Heading: {}", section.heading);
        if !flags.is_empty() {
            println!("    Flags: {}", flags);
        }
    }

    Ok(())
}

/// Handle the style command
fn handle_style_command(category: Category, theme: Theme) {
    let style = style::resolve(category, theme);

    println!("Style for {} / {:?}:", category.label(), theme);
    println!("  Canvas: {}x{}", style.width, style.height);
    println!("  Padding: {}", style.padding);
    println!("  Item spacing: {}", style.item_spacing);
    println!("  Content width: {}", style.content_width());
    println!("  Hero height: {}", style.hero_height);
    println!("  Background: {}", style.palette.background);
    println!("  Heading: {}", style.palette.heading);
    println!("  Body: {}", style.palette.body);
    println!("  Hero: {}", style.palette.hero);
}
