// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Replay a scripted drag over the headings of a markdown file, and print every effect
//! the jump controller emits.
//!
//! The markdown file is laid out one line per row in a `width` x `height` view at the
//! top left of the screen. The drag is a list of rows: a left button press on the
//! first, drags to the ones in between, and a release on the last, all in the view's
//! rightmost column (which is always in the hot-zone). Animations complete instantly.
//!
//! ```text
//! jump_replay notes.md --drag 2,10,11,20 --max-level 2
//! jump_replay notes.md --drag 0,23 --label-color '#ff8000'
//! ```

use std::{collections::VecDeque, path::PathBuf};

use clap::Parser;
use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use jump_nav::{CommonResult, EdgeInsets, GestureSample, HEADING_ATTRIBUTE,
               JumpConfigOptions, JumpEffect, JumpEffects, JumpHost, JumpTextView, Rect,
               RgbValue, TerminalJumpHost, attribute_markdown_headings,
               log::{TracingConfig, try_initialize_logging_global},
               ok};
use miette::{IntoDiagnostic, WrapErr};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    arg_required_else_help = true // If no args are passed, show help.
)]
struct CliArg {
    /// Markdown file whose headings are the jump targets
    markdown_file: PathBuf,
    /// Screen rows of the drag, eg: `2,10,11,20`
    #[arg(long, short, value_delimiter = ',', required = true)]
    drag: Vec<u16>,
    /// Only headings up to this level are jump targets
    #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u8).range(1..=6))]
    max_level: u8,
    /// Width of the view, in cells
    #[arg(long, default_value_t = 80)]
    width: u16,
    /// Height of the view, in cells
    #[arg(long, default_value_t = 24)]
    height: u16,
    /// JSON file with `labelColor`, `labelPadding` and `labelFontSize`
    #[arg(long)]
    config: Option<PathBuf>,
    /// Background of the preview label, eg: `#ff8000`. Overrides the config file
    #[arg(long)]
    label_color: Option<String>,
    /// Write debug logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> CommonResult<()> {
    let cli_arg = CliArg::parse();

    if let Some(log_file) = &cli_arg.log_file {
        try_initialize_logging_global(&TracingConfig::new_file(Some(log_file.clone())))?;
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    let mut config = match &cli_arg.config {
        Some(path) => JumpConfigOptions::try_load_from_file(path)?,
        None => terminal_config_options(),
    };
    if let Some(hex) = &cli_arg.label_color {
        config = config.with_label_color(RgbValue::try_from_hex_color(hex)?);
    }

    let markdown = std::fs::read_to_string(&cli_arg.markdown_file)
        .into_diagnostic()
        .wrap_err_with(|| {
            format!("Could not read {}", cli_arg.markdown_file.display())
        })?;
    let text = attribute_markdown_headings(&markdown)?;

    let view_frame = Rect::from_xywh(
        0.0,
        0.0,
        f64::from(cli_arg.width),
        f64::from(cli_arg.height),
    );
    let mut view = JumpTextView::new(TerminalJumpHost::new(text, view_frame), config);
    let max_level = cli_arg.max_level;
    view.set_label_array_with(HEADING_ATTRIBUTE, |level: &u8| *level <= max_level);

    println!("{} jump targets", view.range_index().len());
    for (index, range) in view.range_index().iter().enumerate() {
        let text = view.host().text_in_range(range).unwrap_or_default();
        println!("  [{index}] {text:?}");
    }

    let column = cli_arg.width.saturating_sub(1);
    for mouse_event in script_mouse_events(&cli_arg.drag, column) {
        let Some(sample) = GestureSample::try_from_mouse_event(mouse_event, view_frame)
        else {
            continue;
        };
        println!("{} at row {}", sample.phase, mouse_event.row);
        let effects = view.handle_gesture(sample);
        apply_and_print(&mut view, effects);
        println!("  scroll offset row: {}", view.host().scroll_offset_row());
    }

    tracing::debug!(message = "Stop logging...");

    ok!()
}

/// Cells are coarse, so the padding is one cell on each side.
fn terminal_config_options() -> JumpConfigOptions {
    JumpConfigOptions {
        label_padding: EdgeInsets::new(0.0, 1.0, 0.0, 1.0),
        label_font_size: 1.0,
        ..Default::default()
    }
}

fn script_mouse_events(rows: &[u16], column: u16) -> Vec<MouseEvent> {
    let mouse_event = |kind, row| MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    };

    let (Some(first), Some(last)) = (rows.first(), rows.last()) else {
        return vec![];
    };

    let mut acc = vec![mouse_event(MouseEventKind::Down(MouseButton::Left), *first)];
    for row in &rows[1..] {
        acc.push(mouse_event(MouseEventKind::Drag(MouseButton::Left), *row));
    }
    acc.push(mouse_event(MouseEventKind::Up(MouseButton::Left), *last));
    acc
}

/// Print and apply each effect. Animations finish right away, so their completion is
/// fed back, and whatever that emits is handled in turn.
fn apply_and_print(view: &mut JumpTextView<TerminalJumpHost>, effects: JumpEffects) {
    let mut queue: VecDeque<JumpEffect> = effects.into_iter().collect();
    while let Some(effect) = queue.pop_front() {
        println!("  {}", describe(&effect));
        view.host_mut().apply_effect(&effect);
        let maybe_completed = match &effect {
            JumpEffect::ShowPreview { slide_in, .. } => Some(slide_in.id),
            JumpEffect::HidePreview { slide_out } => Some(slide_out.id),
            _ => None,
        };
        if let Some(id) = maybe_completed {
            queue.extend(view.handle_animation_completed(id));
        }
    }
}

fn describe(effect: &JumpEffect) -> String {
    match effect {
        JumpEffect::SetUserInteractionEnabled(enabled) => {
            format!("{effect}: {enabled}")
        }
        JumpEffect::ShowPreview { preview, slide_in } => format!(
            "{effect}: {:?} {}x{} at row {}, background {}, {} slides in from column {} to {}",
            preview.text,
            preview.frame.width(),
            preview.frame.height(),
            preview.frame.min_y(),
            preview.background,
            slide_in.id,
            slide_in.from.x,
            slide_in.to.x,
        ),
        JumpEffect::UpdatePreview(preview) => format!(
            "{effect}: {:?} {}x{} at row {}",
            preview.text,
            preview.frame.width(),
            preview.frame.height(),
            preview.frame.min_y(),
        ),
        JumpEffect::ScrollRectToVisible(rect) => {
            format!("{effect}: rows {}..{}", rect.min_y(), rect.max_y())
        }
        JumpEffect::HidePreview { slide_out } => format!(
            "{effect}: {} slides out to column {}",
            slide_out.id, slide_out.to.x
        ),
        JumpEffect::RemovePreview => effect.to_string(),
    }
}
