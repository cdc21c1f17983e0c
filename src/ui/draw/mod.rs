//! Drawing functions for the TUI
//!
//! - `chrome` - Sidebar, top bar, status bar
//! - `content` - Main region, one function per section view

mod chrome;
mod content;

#[cfg(test)]
mod tests;

use ratatui::{style::Style, widgets::Block, Frame};

use crate::app::App;
use crate::ui::layout::ShellLayout;

use chrome::{draw_sidebar, draw_status_bar, draw_top_bar};
use content::draw_content;

/// Main draw function. The whole frame is rebuilt from `app` every call.
pub fn draw(f: &mut Frame, app: &App) {
    let theme = app.theme();
    let area = f.area();
    let layout = ShellLayout::compute(area);

    let bg_block = Block::default().style(Style::default().bg(theme.background).fg(theme.foreground));
    f.render_widget(bg_block, area);

    if layout.sidebar_visible() {
        draw_sidebar(f, app, &layout, theme);
    }
    draw_top_bar(f, app, layout.top_bar, theme);
    draw_content(f, &app.view(), app.config(), layout.content, theme);
    draw_status_bar(f, app, layout.status_bar, theme);
}
