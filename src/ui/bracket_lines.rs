use crate::catalog::Exhibition;
use crate::tournament::{Match, TournamentController};
use crate::ui::constants::UiStyle;
use crate::ui::utils::fit_to_width;
use itertools::Itertools;
use ratatui::{
    style::Style,
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

const BLOCK_HEIGHT: usize = 3;
const GAP: usize = 1;
pub const COL_WIDTH: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Slot {
    A,
    B,
}

struct MatchDescription {
    slot_a_name: String,
    slot_a_style: Style,
    slot_b_name: String,
    slot_b_style: Style,
    result: String,
    winner: Option<Slot>,
}

impl MatchDescription {
    fn from_match(m: &Match<Exhibition>, is_current: bool) -> Self {
        let style_for = |exhibition: &Exhibition| {
            if is_current {
                UiStyle::HIGHLIGHT
            } else if m.winner.as_ref() == Some(exhibition) {
                UiStyle::OK
            } else if m.is_decided() {
                UiStyle::UNSELECTABLE
            } else {
                UiStyle::DEFAULT
            }
        };

        let winner = m.winner.as_ref().map(|w| {
            if *w == m.slot_a {
                Slot::A
            } else {
                Slot::B
            }
        });

        let result = if m.is_bye() {
            "bye"
        } else if is_current {
            "► vs ◄"
        } else {
            "vs"
        };

        Self {
            slot_a_name: fit_to_width(&m.slot_a.short_title(), COL_WIDTH),
            slot_a_style: style_for(&m.slot_a),
            slot_b_name: if m.is_bye() {
                String::new()
            } else {
                fit_to_width(&m.slot_b.short_title(), COL_WIDTH)
            },
            slot_b_style: style_for(&m.slot_b),
            result: result.to_string(),
            winner,
        }
    }
}

fn name_line(name: &str, name_style: Style, line_style: Style, corner: &'static str) -> Line<'static> {
    let padding = COL_WIDTH.saturating_sub(name.width());
    let l = padding / 2;
    Line::from(vec![
        Span::styled("═".repeat(l), line_style),
        Span::raw(" "),
        Span::styled(name.to_string(), name_style),
        Span::raw(" "),
        Span::styled("═".repeat(l + padding % 2), line_style),
        Span::styled(corner, line_style),
    ])
}

// Line holding the result of the `match_idx`-th match of a round.
fn central_line(round_idx: usize, match_idx: usize) -> usize {
    let stride = (BLOCK_HEIGHT + GAP) * (1 << round_idx);
    match_idx * stride + stride / 2 - GAP / 2
}

fn get_round_lines(
    round_idx: usize,
    round_description: Vec<MatchDescription>,
    lines_len: usize,
) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = (0..lines_len).map(|_| Line::default()).collect_vec();

    let num_blank_lines = (1usize << round_idx).saturating_sub(1);

    for (idx, description) in round_description.into_iter().enumerate() {
        let central_line_index = central_line(round_idx, idx);
        if central_line_index + num_blank_lines + 1 >= lines_len {
            break;
        }

        let top_style = if description.winner == Some(Slot::A) {
            UiStyle::OK
        } else {
            UiStyle::DEFAULT
        };
        lines[central_line_index - num_blank_lines - 1] = name_line(
            &description.slot_a_name,
            description.slot_a_style,
            top_style,
            "╗   ",
        );

        let blank_line = Line::from(vec![
            Span::raw(" ".repeat(COL_WIDTH + 2)),
            Span::styled("║", top_style),
        ]);
        for b_idx in 0..num_blank_lines {
            lines[central_line_index - num_blank_lines + b_idx] = blank_line.clone();
        }

        let result_width = COL_WIDTH + 2;
        let (junction, junction_style) = match description.winner {
            Some(Slot::A) => ("╚═", UiStyle::OK),
            Some(Slot::B) => ("╔═", UiStyle::OK),
            None => ("╠═", UiStyle::DEFAULT),
        };
        lines[central_line_index] = Line::from(vec![
            Span::raw(format!("{:^result_width$}", description.result)),
            Span::styled(junction, junction_style),
        ]);

        let bottom_style = if description.winner == Some(Slot::B) {
            UiStyle::OK
        } else {
            UiStyle::DEFAULT
        };
        let blank_line = Line::from(vec![
            Span::raw(" ".repeat(COL_WIDTH + 2)),
            Span::styled("║", bottom_style),
        ]);
        for b_idx in 0..num_blank_lines {
            lines[central_line_index + 1 + b_idx] = blank_line.clone();
        }

        lines[central_line_index + num_blank_lines + 1] = name_line(
            &description.slot_b_name,
            description.slot_b_style,
            bottom_style,
            "╝   ",
        );
    }

    lines
}

/// Number of lines a bracket with `total_rounds` rounds needs.
pub fn bracket_height(total_rounds: usize) -> usize {
    if total_rounds == 0 {
        return 0;
    }
    (BLOCK_HEIGHT + GAP) * (1 << (total_rounds - 1))
}

/// Line of the match being played, to keep it in view when scrolling.
pub fn current_match_line(world_cup: &TournamentController<Exhibition>) -> Option<usize> {
    let current = world_cup.current_match()?;
    Some(central_line(current.id.round - 1, current.id.position))
}

/// One column of lines per round created so far, plus one for the champion.
pub fn get_bracket_lines(world_cup: &TournamentController<Exhibition>) -> Vec<Vec<Line<'static>>> {
    let total_rounds = world_cup.total_rounds();
    let lines_len = bracket_height(total_rounds);
    let current_id = world_cup.current_match().map(|m| m.id);

    let mut lines = world_cup
        .rounds()
        .iter()
        .enumerate()
        .map(|(round_idx, round)| {
            let descriptions = round
                .matches
                .iter()
                .map(|m| MatchDescription::from_match(m, Some(m.id) == current_id))
                .collect_vec();
            get_round_lines(round_idx, descriptions, lines_len)
        })
        .collect_vec();

    if let Some(champion) = world_cup.champion() {
        let mut champion_lines: Vec<Line> = (0..lines_len).map(|_| Line::default()).collect_vec();

        champion_lines[central_line(total_rounds - 1, 0)] = Line::from(vec![
            Span::styled("══ ", UiStyle::OK),
            Span::styled(fit_to_width(&champion.short_title(), COL_WIDTH), UiStyle::OK),
        ]);
        lines.push(champion_lines);
    }

    lines
}
