use crate::core::location::Route;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{NotFound, PostDetail, PostList, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, hint_area] = layout.areas(frame.area());

    let loading_frame = app.is_loading().then_some(spinner_frame);
    TitleBar::new(
        app.location().to_string(),
        app.status_message.clone(),
        loading_frame,
    )
    .render(frame, title_area);

    draw_main(frame, main_area, app, tui, spinner_frame);

    frame.render_widget(
        Span::styled(key_hints(app.route), Style::default().fg(Color::DarkGray)),
        hint_area,
    );
}

fn draw_main(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    match app.route {
        Route::List => {
            PostList::new(&app.list, &mut tui.post_list, spinner_frame).render(frame, area)
        }
        Route::Post { .. } => {
            PostDetail::new(&app.detail, &mut tui.post_detail, spinner_frame).render(frame, area)
        }
        Route::Create => tui.form.render(frame, area, app.create.is_submitting()),
        Route::Unknown => NotFound::page().render(frame, area),
    }
}

fn key_hints(route: Route) -> &'static str {
    match route {
        Route::List => {
            "↑↓ select  Enter open  ←/p prev  →/n next  c create  r reload  Alt+←/→ history  q quit"
        }
        Route::Post { .. } => "↑↓ scroll  Esc back to posts  r reload  Alt+←/→ history  q quit",
        Route::Create => "Tab switch field  Ctrl+J newline  Ctrl+S publish  Esc back to posts",
        Route::Unknown => "Esc back to posts  Alt+← history  q quit",
    }
}
