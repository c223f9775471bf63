//! GameView: encodes a complete game frame as crossterm commands.
//!
//! Layout, top to bottom: title and timer, level/score/best badges, the 4x4
//! board with the cursor and hint markers, then the side panel folded into
//! lines below the board (active tile, keep slot, upcoming preview, trash
//! counter) and a status/help footer.
//!
//! The view only reads the session; all state changes flow through the
//! shell's action handling.

use anyhow::Result;

use crossterm::{
    cursor::MoveTo,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
    QueueableCommand,
};

use just_divide_core::GameSession;
use just_divide_types::{ColorBand, GameStatus, Hint, HintReason, Tile, GRID_SIZE};

/// Render the elapsed seconds as MM:SS.
pub fn format_time(sec: u32) -> String {
    format!("{:02}:{:02}", sec / 60, sec % 60)
}

/// Terminal color for a tile's band.
pub fn band_color(band: ColorBand) -> Color {
    match band {
        ColorBand::Pink => Color::Rgb {
            r: 255,
            g: 130,
            b: 180,
        },
        ColorBand::Blue => Color::Rgb {
            r: 90,
            g: 150,
            b: 230,
        },
        ColorBand::Orange => Color::Rgb {
            r: 240,
            g: 150,
            b: 60,
        },
        ColorBand::Red => Color::Rgb {
            r: 220,
            g: 70,
            b: 70,
        },
        ColorBand::Purple => Color::Rgb {
            r: 150,
            g: 80,
            b: 200,
        },
    }
}

fn hint_color(reason: HintReason) -> Color {
    match reason {
        HintReason::Equal => Color::Green,
        HintReason::Divisible => Color::Cyan,
    }
}

fn tile_label(tile: Option<Tile>) -> String {
    match tile {
        Some(tile) => format!("{:^4}", tile.value),
        None => format!("{:^4}", "."),
    }
}

/// Encode one full frame for the session into `out`.
pub fn encode_frame(
    session: &GameSession,
    cursor: (usize, usize),
    out: &mut Vec<u8>,
) -> Result<()> {
    out.queue(Clear(ClearType::All))?;

    let hints = session.hints();
    let mut row: u16 = 0;

    // Title and timer.
    out.queue(MoveTo(0, row))?;
    out.queue(SetAttribute(Attribute::Bold))?;
    out.queue(Print("JUST DIVIDE"))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(Print(format!("   TIME {}", format_time(session.timer_sec()))))?;
    row += 1;

    out.queue(MoveTo(0, row))?;
    out.queue(Print(format!(
        "LEVEL {}   SCORE {}   BEST {}",
        session.level(),
        session.score(),
        session.best()
    )))?;
    row += 2;

    // Board.
    for r in 0..GRID_SIZE {
        out.queue(MoveTo(0, row))?;
        out.queue(Print("|"))?;
        for c in 0..GRID_SIZE {
            let tile = session.grid().tile(r, c);
            let hinted = hints.iter().find(|h| (h.row, h.col) == (r, c));
            encode_cell(out, tile, cursor == (r, c), hinted)?;
            out.queue(Print("|"))?;
        }
        row += 1;
    }
    row += 1;

    // Panel lines.
    out.queue(MoveTo(0, row))?;
    out.queue(Print("ACTIVE "))?;
    encode_tile_chip(out, session.active())?;
    out.queue(Print("   KEEP "))?;
    encode_tile_chip(out, session.keep())?;
    out.queue(Print(format!("   TRASH x{}", session.trash_count())))?;
    row += 1;

    out.queue(MoveTo(0, row))?;
    out.queue(Print("UPCOMING "))?;
    // The preview shows only the first two queued tiles.
    for tile in session.queue_tiles().iter().take(2) {
        encode_tile_chip(out, Some(*tile))?;
        out.queue(Print(" "))?;
    }
    row += 1;

    out.queue(MoveTo(0, row))?;
    out.queue(Print(format!(
        "HINTS {}   DIFFICULTY {}",
        if session.hints_enabled() { "ON" } else { "OFF" },
        session.difficulty().index()
    )))?;
    row += 2;

    // Status line.
    out.queue(MoveTo(0, row))?;
    match session.status() {
        GameStatus::GameOver(score) => {
            out.queue(SetAttribute(Attribute::Bold))?;
            out.queue(Print(format!("GAME OVER - score {score} - (r) restart")))?;
            out.queue(SetAttribute(Attribute::Reset))?;
        }
        _ if session.paused() => {
            out.queue(SetAttribute(Attribute::Bold))?;
            out.queue(Print("PAUSED"))?;
            out.queue(SetAttribute(Attribute::Reset))?;
        }
        GameStatus::LevelUp(level) => {
            out.queue(Print(format!("LEVEL UP - now level {level}")))?;
        }
        GameStatus::Continue => {
            out.queue(Print("Combine equal or divisible neighbors."))?;
        }
    }
    row += 1;

    out.queue(MoveTo(0, row))?;
    out.queue(SetAttribute(Attribute::Dim))?;
    out.queue(Print(
        "arrows move  enter place  k keep  t trash  z undo  g hints  p pause  1-3 difficulty  q quit",
    ))?;
    out.queue(SetAttribute(Attribute::Reset))?;

    Ok(())
}

/// One board cell: value colored by band, cursor brackets, hint marker.
fn encode_cell(
    out: &mut Vec<u8>,
    tile: Option<Tile>,
    under_cursor: bool,
    hinted: Option<&Hint>,
) -> Result<()> {
    if under_cursor {
        out.queue(SetAttribute(Attribute::Bold))?;
        out.queue(Print(">"))?;
    } else {
        out.queue(Print(" "))?;
    }

    match (tile, hinted) {
        (Some(tile), Some(hint)) => {
            out.queue(SetForegroundColor(hint_color(hint.reason)))?;
            out.queue(Print(tile_label(Some(tile))))?;
            out.queue(ResetColor)?;
        }
        (Some(tile), None) => {
            out.queue(SetForegroundColor(band_color(tile.band())))?;
            out.queue(Print(tile_label(Some(tile))))?;
            out.queue(ResetColor)?;
        }
        (None, _) => {
            out.queue(SetAttribute(Attribute::Dim))?;
            out.queue(Print(tile_label(None)))?;
            out.queue(SetAttribute(Attribute::Reset))?;
        }
    }

    if under_cursor {
        out.queue(Print("<"))?;
        out.queue(SetAttribute(Attribute::Reset))?;
    } else {
        out.queue(Print(" "))?;
    }
    Ok(())
}

/// A small inline tile chip, e.g. `[ 12 ]`, colored by band.
fn encode_tile_chip(out: &mut Vec<u8>, tile: Option<Tile>) -> Result<()> {
    out.queue(Print("["))?;
    match tile {
        Some(tile) => {
            out.queue(SetForegroundColor(band_color(tile.band())))?;
            out.queue(Print(format!("{:^4}", tile.value)))?;
            out.queue(ResetColor)?;
        }
        None => {
            out.queue(SetAttribute(Attribute::Dim))?;
            out.queue(Print(format!("{:^4}", "-")))?;
            out.queue(SetAttribute(Attribute::Reset))?;
        }
    }
    out.queue(Print("]"))?;
    Ok(())
}
