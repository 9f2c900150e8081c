//! Non-interactive subcommands. Output goes to any writer so it can be tested.

use anyhow::{Context, Result};
use seikyo_engine::render::{RenderOptions, html, plain};
use seikyo_engine::{convert as converter, io, render_chapter, search as searcher};
use std::io::Write;
use std::path::Path;

pub fn list(data: &Path, out: &mut impl Write) -> Result<()> {
    for category in io::categories(data)? {
        writeln!(out, "{category}")?;
        for info in io::scriptures_by_category(data, &category)? {
            writeln!(
                out,
                "  {}  {} ({} chapters)",
                info.id, info.title, info.chapter_count
            )?;
        }
    }
    Ok(())
}

pub fn show(
    data: &Path,
    category: &str,
    id: &str,
    chapter_id: &str,
    as_html: bool,
    opts: RenderOptions,
    out: &mut impl Write,
) -> Result<()> {
    let (scripture, chapter) = io::load_chapter(data, category, id, chapter_id)?;
    let rendered = render_chapter(&chapter.content, &chapter.glossary);

    if as_html {
        write!(out, "{}", html::render_blocks(&rendered, opts))?;
        write!(out, "{}", html::glossary_list(&chapter.glossary))?;
    } else {
        writeln!(out, "{} {}\n", scripture.title, chapter.title)?;
        write!(out, "{}", plain::render_blocks(&rendered, opts))?;
    }
    Ok(())
}

pub fn search(data: &Path, query: &str, out: &mut impl Write) -> Result<()> {
    let hits = searcher::search(data, query)?;
    if hits.is_empty() {
        writeln!(out, "No matches for {:?}", query.trim())?;
        return Ok(());
    }
    for hit in hits {
        writeln!(
            out,
            "{}/{} {} {}",
            hit.category, hit.scripture_id, hit.scripture_title, hit.chapter_title
        )?;
        writeln!(out, "  {}", hit.snippet)?;
    }
    Ok(())
}

pub fn convert(input: &Path, output: Option<&Path>) -> Result<()> {
    let output = output.map_or_else(|| converter::default_output_path(input), Path::to_path_buf);
    converter::convert_file(input, &output)
        .with_context(|| format!("Failed to convert {}", input.display()))?;
    Ok(())
}
