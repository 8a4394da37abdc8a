use std::fmt::Write;

use common::games::tictactoe::{GameMode, Mark, SessionSnapshot, player_label, status_line};

use crate::theme::{ANSI_BOLD, ANSI_RESET, Palette, Rgb, mark_color};

pub const HELP_LINE: &str =
    "[1-9] place  [r] reset  [m] two players / vs computer  [s] clear scores  [q] quit";

/// Renders a snapshot as plain text, or with 24-bit ANSI colours when a palette is given.
pub fn render_snapshot(snapshot: &SessionSnapshot, palette: Option<&Palette>) -> String {
    let state = &snapshot.state;
    let scoreboard = &snapshot.scoreboard;
    let mode = state.mode();
    let mut out = String::new();

    let mode_label = match mode {
        GameMode::TwoPlayers => "Two Players",
        GameMode::VsComputer => "vs Computer",
    };
    let title = paint("Tic Tac Toe", palette.map(|p| p.primary), palette);
    let _ = writeln!(out, "{}{}{}  ({})", bold(palette), title, reset(palette), mode_label);
    match state.last_move() {
        Some(index) => {
            let _ = writeln!(out, "{}  (last move: {})", status_line(state), index + 1);
        }
        None => {
            let _ = writeln!(out, "{}", status_line(state));
        }
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        " {}: {}  |  Draws: {}  |  {}: {}",
        paint(player_label(Mark::X, mode), mark_color(Mark::X), palette),
        scoreboard.wins(Mark::X),
        scoreboard.draws,
        paint(player_label(Mark::O, mode), mark_color(Mark::O), palette),
        scoreboard.wins(Mark::O),
    );
    let _ = writeln!(out);

    let winning_line = state.winning_line();
    let border = palette.map(|p| p.border);
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| {
                let index = row * 3 + col;
                let highlighted = winning_line.is_some_and(|line| line.contains(index));
                render_cell(index, state.board().get(index), highlighted, palette)
            })
            .collect();
        let bar = paint("|", border, palette);
        let _ = writeln!(out, "  {} {} {} {} {}", cells[0], bar, cells[1], bar, cells[2]);
        if row < 2 {
            let _ = writeln!(out, " {}", paint("---+---+---", border, palette));
        }
    }

    if let Some(line) = winning_line {
        let cells: Vec<String> = line.cells.iter().map(|i| (i + 1).to_string()).collect();
        let _ = writeln!(out);
        let _ = writeln!(out, "Winning line: {}", cells.join("-"));
    }

    if state.is_over() {
        let banner = format!("*** {} Press r to play again. ***", status_line(state));
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", paint(&banner, palette.map(|p| p.notification), palette));
    }

    let _ = writeln!(out);
    let _ = write!(out, "{}", HELP_LINE);
    out
}

fn render_cell(index: usize, mark: Mark, highlighted: bool, palette: Option<&Palette>) -> String {
    let text = match mark {
        Mark::Empty => (index + 1).to_string(),
        mark => mark.to_string(),
    };
    let Some(p) = palette else {
        return text;
    };
    match mark {
        Mark::Empty => paint(&text, Some(p.border), palette),
        _ if highlighted => format!("{}{}{}{}", ANSI_BOLD, p.notification.fg(), text, ANSI_RESET),
        mark => paint(&text, mark_color(mark), palette),
    }
}

fn paint(text: &str, color: Option<Rgb>, palette: Option<&Palette>) -> String {
    match (color, palette) {
        (Some(color), Some(_)) => format!("{}{}{}", color.fg(), text, ANSI_RESET),
        _ => text.to_string(),
    }
}

fn bold(palette: Option<&Palette>) -> &'static str {
    if palette.is_some() { ANSI_BOLD } else { "" }
}

fn reset(palette: Option<&Palette>) -> &'static str {
    if palette.is_some() { ANSI_RESET } else { "" }
}
