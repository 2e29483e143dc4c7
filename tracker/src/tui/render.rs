use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, List, ListItem, ListState, Paragraph, Tabs},
};
use re_catalogue::{Item, Rarity};

use super::app::{App, Focus};

/// Application title.
pub const TITLE: &str = "Bronzebeard RE Tracker";

const HELP: &str = "Tab focus  ←/→ change  ↑/↓ move  Enter expand  / search  Esc clear  q quit";

fn rarity_color(rarity: Rarity) -> Color {
    let (r, g, b) = rarity.rgb();
    Color::Rgb(r, g, b)
}

fn panel(title: &str, focused: bool) -> Block<'_> {
    let block = Block::bordered().title(title);
    if focused {
        block.border_style(Style::new().fg(Color::Yellow))
    } else {
        block.border_style(Style::new().fg(Color::DarkGray))
    }
}

/// Draw the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let [title, classes, filters, items, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(
        Paragraph::new(TITLE.bold()).centered(),
        title,
    );
    draw_classes(frame, app, classes);
    draw_filters(frame, app, filters);
    draw_items(frame, app, items);
    draw_footer(frame, app, footer);
}

fn draw_classes(frame: &mut Frame, app: &App, area: Rect) {
    let tabs = Tabs::new(app.view.class_options().map(Line::from).collect::<Vec<_>>())
        .select(app.view.current_class_index())
        .highlight_style(Style::new().add_modifier(Modifier::BOLD | Modifier::REVERSED))
        .block(panel("Class", app.focus == Focus::Class));
    frame.render_widget(tabs, area);
}

fn draw_filters(frame: &mut Frame, app: &App, area: Rect) {
    let [search, rarity, spec] = Layout::horizontal([
        Constraint::Min(20),
        Constraint::Length(16),
        Constraint::Length(20),
    ])
    .areas(area);

    let search_focused = app.focus == Focus::Search;
    let search_text = if app.view.search_text().is_empty() && !search_focused {
        "Search...".dark_gray()
    } else {
        app.view.search_text().into()
    };
    frame.render_widget(
        Paragraph::new(search_text).block(panel("Search", search_focused)),
        search,
    );
    if search_focused {
        let width = app.view.search_text().chars().count() as u16;
        let x = (search.x + 1 + width).min(search.right().saturating_sub(2));
        frame.set_cursor_position((x, search.y + 1));
    }

    let rarity_label = match app.view.rarity_filter() {
        Some(r) => r.label().fg(rarity_color(r)),
        None => "Any".into(),
    };
    frame.render_widget(
        Paragraph::new(rarity_label).block(panel("Rarity", app.focus == Focus::Rarity)),
        rarity,
    );

    let spec_label = app.view.spec_filter().unwrap_or("Any");
    frame.render_widget(
        Paragraph::new(spec_label).block(panel("Spec", app.focus == Focus::Spec)),
        spec,
    );
}

fn item_entry<'a>(item: &'a Item, expanded: bool) -> ListItem<'a> {
    let marker = if expanded { "▾ " } else { "▸ " };
    let header = Line::from(vec![
        Span::raw(marker),
        Span::styled(
            item.name.as_str(),
            Style::new()
                .fg(Color::White)
                .bg(rarity_color(item.rarity))
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    if !expanded {
        return ListItem::new(header);
    }
    let location = if item.has_location() {
        Span::raw(item.location.as_str())
    } else {
        item.location_or_unknown().italic().dark_gray()
    };
    ListItem::new(Text::from(vec![
        header,
        Line::from(vec![Span::raw("    "), location]),
    ]))
}

fn draw_items(frame: &mut Frame, app: &App, area: Rect) {
    let class = app.view.current_class();
    let visible = app.view.visible_items();
    let title = format!("{} ({}/{})", class.name, visible.len(), class.items.len());
    let block = panel(&title, app.focus == Focus::Items);

    if visible.is_empty() {
        frame.render_widget(
            Paragraph::new("No items match the current filters".dark_gray()).block(block),
            area,
        );
        return;
    }

    let entries: Vec<ListItem> = visible
        .iter()
        .map(|item| item_entry(item, app.is_expanded(&item.name)))
        .collect();
    let list = List::new(entries)
        .block(block)
        .highlight_symbol("> ")
        .highlight_style(Style::new().add_modifier(Modifier::UNDERLINED));
    let mut state = ListState::default().with_selected(Some(app.cursor));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(vec![
        Span::raw("Known locations: "),
        Span::styled(app.view.coverage().to_string(), Style::new().bold()),
        Span::raw("  "),
        Span::styled(HELP, Style::new().dark_gray()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ratatui::{Terminal, backend::TestBackend};
    use re_catalogue::{Catalogue, CatalogueView};

    use super::*;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app() -> App {
        let catalogue = Arc::new(Catalogue::bundled().unwrap());
        App::new(CatalogueView::new(catalogue, "Paladin").unwrap())
    }

    #[test]
    fn test_renders_title_classes_and_items() {
        let screen = render(&app());
        assert!(screen.contains(TITLE));
        assert!(screen.contains("Warrior"));
        assert!(screen.contains("Ashbringer"));
        assert!(screen.contains("Paladin (6/6)"));
        assert!(screen.contains("Known locations: "));
    }

    #[test]
    fn test_expanded_item_shows_location() {
        let mut app = app();
        app.toggle_expanded();
        let screen = render(&app);
        assert!(screen.contains("Naxxramas"));

        app.cursor = 2;
        app.toggle_expanded();
        let screen = render(&app);
        assert!(!screen.contains("Naxxramas"));
        assert!(screen.contains("Unknown"));
    }

    #[test]
    fn test_empty_result_message() {
        let mut app = app();
        app.view.set_search_text("zzz");
        let screen = render(&app);
        assert!(screen.contains("No items match the current filters"));
        assert!(screen.contains("Paladin (0/6)"));
    }

    #[test]
    fn test_filter_labels() {
        let mut app = app();
        app.view.set_rarity_filter(Some(Rarity::Legendary));
        app.view.set_spec_filter(Some("Holy"));
        let screen = render(&app);
        assert!(screen.contains("Legendary"));
        assert!(screen.contains("Holy"));
        assert!(screen.contains("Paladin (1/6)"));
    }
}
