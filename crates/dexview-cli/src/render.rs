//! Human-readable terminal rendering. JSON mode bypasses this module.

use std::io::Write;

use anyhow::Result;
use termcolor::{Color, ColorSpec, WriteColor};

use crate::cmd::{BrowseOut, EvolutionOut, RegionsOut, ShowOut};
use crate::output;

const BAR_WIDTH: usize = 20;

pub fn browse(out: &BrowseOut) -> Result<()> {
    let mut w = output::stdout();
    for card in &out.entries {
        w.set_color(ColorSpec::new().set_bold(true))?;
        write!(w, "{:>6}", card.number)?;
        w.reset()?;
        writeln!(w, "  {:<24} {}", card.name, card.types.join("/"))?;
    }
    writeln!(
        w,
        "\nshowing {} of {} matches ({} in catalog){}",
        out.shown,
        out.matched,
        out.total,
        if out.has_more { ", use --pages for more" } else { "" }
    )?;
    Ok(())
}

pub fn show(out: &ShowOut) -> Result<()> {
    let mut w = output::stdout();

    w.set_color(ColorSpec::new().set_bold(true))?;
    write!(w, "{} {}", out.number, out.name)?;
    w.reset()?;
    writeln!(w, "  [{}]", out.types.join("/"))?;
    if let Some(genus) = &out.genus {
        writeln!(w, "{genus}")?;
    }
    writeln!(w, "\n{}\n", out.description)?;
    writeln!(w, "Height  {:.1} m", out.height_m)?;
    writeln!(w, "Weight  {:.1} kg", out.weight_kg)?;
    if let Some(xp) = out.base_experience {
        writeln!(w, "Base XP {xp}")?;
    }

    heading(&mut w, "Stats")?;
    for s in &out.stats {
        let filled = (s.bar * BAR_WIDTH as f64).round() as usize;
        writeln!(
            w,
            "{:<11} {:>3} {}{}",
            s.label,
            s.base,
            "#".repeat(filled),
            ".".repeat(BAR_WIDTH.saturating_sub(filled))
        )?;
    }

    heading(&mut w, "Evolution")?;
    match &out.evolution {
        EvolutionOut::Columns(columns) if !columns.is_empty() => {
            for (level, column) in columns.iter().enumerate() {
                let names = column
                    .iter()
                    .map(|e| {
                        if e.current {
                            format!("[{} {}]", e.number, e.name)
                        } else {
                            format!("{} {}", e.number, e.name)
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(" | ");
                writeln!(w, "{level}: {names}")?;
            }
        }
        _ => writeln!(w, "No evolution data available")?,
    }
    Ok(())
}

pub fn regions(out: &RegionsOut) -> Result<()> {
    let mut w = output::stdout();
    for r in &out.regions {
        match r.count {
            Some(count) => writeln!(w, "{:<8} #{:03}..#{:03}", r.key, r.start + 1, r.start + count)?,
            None => writeln!(w, "{:<8} entire catalog", r.key)?,
        }
    }
    Ok(())
}

fn heading(w: &mut impl WriteColor, title: &str) -> Result<()> {
    w.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
    writeln!(w, "\n{title}")?;
    w.reset()?;
    Ok(())
}
