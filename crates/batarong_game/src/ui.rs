// crates/batarong_game/src/ui.rs
//! All text and full-screen overlays, drawn straight onto egui layer
//! painters at fixed screen coordinates.

use egui::{Align2, Color32, Context, FontId, Id, LayerId, Order, Pos2, Rect, Vec2 as EVec2};

use batarong_shared::{SCREEN_HEIGHT, SCREEN_WIDTH};

use crate::dialog::DialogState;
use crate::minigames::gambling::{GamblingState, SpinResult, MIN_BET, MIN_PIWO_TO_PLAY};
use crate::minigames::shop::ShopState;
use crate::state::MAX_SPRINT_ENERGY;

const FONT_LARGE: f32 = 24.0;
const FONT_SMALL: f32 = 18.0;

fn screen_rect() -> Rect {
    Rect::from_min_size(Pos2::ZERO, EVec2::new(SCREEN_WIDTH, SCREEN_HEIGHT))
}

fn screen_painter(ctx: &Context, id: &str) -> egui::Painter {
    ctx.layer_painter(LayerId::new(Order::Middle, Id::new(id)))
}

fn text(painter: &egui::Painter, pos: (f32, f32), size: f32, color: Color32, text: impl ToString) {
    painter.text(
        Pos2::new(pos.0, pos.1),
        Align2::LEFT_TOP,
        text,
        FontId::proportional(size),
        color,
    );
}

/// Piwo counter, sprint bar and the contextual interaction prompt.
pub fn draw_hud(ctx: &Context, piwo_count: u64, sprint_energy: f32, prompt: Option<&str>) {
    let painter = screen_painter(ctx, "hud");

    text(
        &painter,
        (650.0, 10.0),
        FONT_LARGE,
        Color32::WHITE,
        format!("Piwo: {piwo_count}"),
    );

    let bar = Rect::from_min_size(Pos2::new(10.0, 560.0), EVec2::new(200.0, 20.0));
    painter.rect_filled(bar, 0.0, Color32::from_gray(100));
    let fill = (sprint_energy / MAX_SPRINT_ENERGY).clamp(0.0, 1.0);
    let fill_rect = Rect::from_min_size(bar.min, EVec2::new(bar.width() * fill, bar.height()));
    painter.rect_filled(fill_rect, 0.0, Color32::from_rgb(0, 200, 255));

    if let Some(prompt) = prompt {
        text(&painter, (230.0, 560.0), FONT_SMALL, Color32::WHITE, prompt);
    }
}

pub fn draw_gambling(ctx: &Context, gambling: &GamblingState, piwo_count: u64) {
    let painter = screen_painter(ctx, "gambling");
    painter.rect_filled(screen_rect(), 0.0, Color32::from_rgb(50, 0, 100));

    text(
        &painter,
        (250.0, 50.0),
        FONT_LARGE,
        Color32::WHITE,
        "Gambling Machine",
    );
    text(
        &painter,
        (250.0, 100.0),
        FONT_LARGE,
        Color32::WHITE,
        format!("Your piwo: {piwo_count}"),
    );

    if gambling.spinning {
        text(
            &painter,
            (350.0, 250.0),
            FONT_LARGE,
            Color32::WHITE,
            "Spinning...",
        );
    } else if let Some(result) = &gambling.result {
        let line = match result {
            SpinResult::WonDouble { winnings, .. } => format!("Jackpot! You won {winnings} piwo!"),
            SpinResult::WonQuarter { winnings, .. } => format!("You won {winnings} piwo!"),
            SpinResult::Lost { bet } => format!("You lost {bet} piwo."),
        };
        text(&painter, (250.0, 250.0), FONT_LARGE, Color32::WHITE, line);
    }

    let input_box = Rect::from_min_size(Pos2::new(20.0, 500.0), EVec2::new(250.0, 40.0));
    painter.rect_filled(input_box, 0.0, Color32::from_gray(70));
    if gambling.bet_input.is_empty() {
        text(
            &painter,
            (30.0, 508.0),
            FONT_SMALL,
            Color32::from_gray(160),
            format!("Enter bet (min {MIN_BET})"),
        );
    } else {
        text(
            &painter,
            (30.0, 508.0),
            FONT_LARGE,
            Color32::WHITE,
            &gambling.bet_input,
        );
    }

    if gambling.showing_error() {
        text(
            &painter,
            (250.0, 300.0),
            FONT_SMALL,
            Color32::RED,
            "Invalid bet!",
        );
    }

    if !gambling.spinning && gambling.result.is_none() {
        let (prompt, color) = idle_gambling_prompt(piwo_count);
        text(&painter, (300.0, 500.0), FONT_SMALL, color, prompt);
    }
}

/// Bottom prompt while the machine is idle: the call to spin, or the bank
/// requirement that blocks it.
fn idle_gambling_prompt(piwo_count: u64) -> (&'static str, Color32) {
    if piwo_count < MIN_PIWO_TO_PLAY {
        ("Need at least 10 piwo to play!", Color32::RED)
    } else {
        ("Press A to spin!", Color32::WHITE)
    }
}

pub fn draw_shop(ctx: &Context, shop: &ShopState, piwo_count: u64) {
    let painter = screen_painter(ctx, "shop");
    painter.rect_filled(screen_rect(), 0.0, Color32::from_rgb(0, 100, 100));

    text(&painter, (250.0, 50.0), FONT_LARGE, Color32::WHITE, "Shop");
    text(
        &painter,
        (250.0, 100.0),
        FONT_LARGE,
        Color32::WHITE,
        format!("Your piwo: {piwo_count}"),
    );

    for (i, item) in shop.items().iter().enumerate() {
        let y = 150.0 + i as f32 * 80.0;
        let row = Rect::from_min_size(Pos2::new(200.0, y), EVec2::new(400.0, 60.0));
        let fill = if item.purchased {
            Color32::from_gray(60)
        } else {
            Color32::from_gray(40)
        };
        painter.rect_filled(row, 0.0, fill);

        let line = if item.purchased {
            format!("{}. {} (owned)", i + 1, item.name)
        } else {
            format!("{}. {} - {} piwo", i + 1, item.name, item.price)
        };
        text(&painter, (220.0, y + 15.0), FONT_SMALL, Color32::WHITE, line);
    }

    text(
        &painter,
        (250.0, 420.0),
        FONT_SMALL,
        Color32::WHITE,
        "Press 1-3 to buy, B to leave",
    );
}

pub fn draw_paused(ctx: &Context) {
    let painter = screen_painter(ctx, "paused");
    painter.rect_filled(screen_rect(), 0.0, Color32::from_black_alpha(160));
    text(&painter, (360.0, 240.0), FONT_LARGE, Color32::WHITE, "Paused");
    text(
        &painter,
        (300.0, 280.0),
        FONT_SMALL,
        Color32::WHITE,
        "Press ESC to Resume",
    );
}

pub fn draw_game_over(ctx: &Context, piwo_count: u64) {
    let painter = screen_painter(ctx, "game_over");
    painter.rect_filled(screen_rect(), 0.0, Color32::BLACK);
    text(
        &painter,
        (300.0, 250.0),
        FONT_LARGE,
        Color32::RED,
        "Game Over",
    );
    text(
        &painter,
        (270.0, 300.0),
        FONT_SMALL,
        Color32::WHITE,
        format!("You kept {piwo_count} piwo"),
    );
    text(
        &painter,
        (300.0, 350.0),
        FONT_SMALL,
        Color32::WHITE,
        "Press R to Restart",
    );
}

pub fn draw_dialog(ctx: &Context, dialog: &DialogState) {
    let Some(line) = dialog.current_line() else {
        return;
    };

    // Dialog sits above full-screen mode overlays.
    let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("dialog")));

    let box_rect = Rect::from_min_size(Pos2::new(20.0, 440.0), EVec2::new(760.0, 140.0));
    painter.rect_filled(box_rect, 0.0, Color32::from_black_alpha(180));

    let mut text_x = 40.0;
    if dialog.portrait_visible {
        let portrait = Rect::from_min_size(Pos2::new(35.0, 455.0), EVec2::new(96.0, 96.0));
        painter.rect_filled(portrait, 0.0, Color32::from_gray(90));
        text_x = 150.0;
    }

    let mut text_y = 455.0;
    if dialog.speaker_visible {
        text(
            &painter,
            (text_x, text_y),
            FONT_SMALL,
            Color32::from_rgb(255, 220, 120),
            &dialog.speaker,
        );
        text_y += 26.0;
    }

    text(&painter, (text_x, text_y), FONT_SMALL, Color32::WHITE, line);

    let (current, total) = dialog.progress();
    text(
        &painter,
        (720.0, 550.0),
        FONT_SMALL,
        Color32::from_gray(170),
        format!("{current}/{total}"),
    );
}
