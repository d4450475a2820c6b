use ratatui::widgets::Clear;
use ratatui::Frame;

use crate::nav::Route;
use crate::strings;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::screens;

/// Draw one frame: header, active screen, footer.
pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let (title, hints) = match app.route() {
        Route::List => (strings::TITLE_LIST, strings::LIST_KEY_HINTS),
        Route::Detail { .. } => (strings::TITLE_DETAIL, strings::DETAIL_KEY_HINTS),
    };
    // The refresh indicator belongs to the list title bar only.
    let refreshing = match app.route() {
        Route::List if app.catalog().is_refreshing() => Some(strings::REFRESHING),
        _ => None,
    };

    frame.render_widget(Header::new().widget(title, refreshing), header);
    frame.render_widget(Clear, body);
    match app.route() {
        Route::List => screens::list::render(frame, app, body),
        Route::Detail { .. } => screens::detail::render(frame, app, body),
    }
    frame.render_widget(Footer::new().widget(hints, footer), footer);
}
