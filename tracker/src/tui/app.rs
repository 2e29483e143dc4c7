use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use re_catalogue::{CatalogueView, Rarity};

/// Which control receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Class,
    Search,
    Rarity,
    Spec,
    Items,
}

impl Focus {
    /// Tab order.
    pub const ALL: [Focus; 5] = [
        Focus::Class,
        Focus::Search,
        Focus::Rarity,
        Focus::Spec,
        Focus::Items,
    ];

    fn step(self, delta: isize) -> Self {
        let len = Self::ALL.len() as isize;
        let pos = Self::ALL.iter().position(|f| *f == self).unwrap_or(0) as isize;
        Self::ALL[(pos + delta).rem_euclid(len) as usize]
    }
}

/// Interactive state on top of the view model: focus, list cursor and the
/// expanded item.
pub struct App {
    pub view: CatalogueView,
    pub focus: Focus,
    /// Position in the visible item list.
    pub cursor: usize,
    /// Name of the item whose location panel is open.
    expanded: Option<String>,
    pub should_quit: bool,
}

/// Step `current` by `delta` through `len` slots, wrapping around.
fn wrap(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current as isize + delta).rem_euclid(len as isize) as usize
}

impl App {
    pub fn new(view: CatalogueView) -> Self {
        Self {
            view,
            focus: Focus::Items,
            cursor: 0,
            expanded: None,
            should_quit: false,
        }
    }

    pub fn is_expanded(&self, name: &str) -> bool {
        self.expanded.as_deref() == Some(name)
    }

    /// Apply one key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.step(1);
                return;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.step(-1);
                return;
            }
            KeyCode::Esc => {
                if self.view.clear_filters() {
                    self.after_filter_change();
                }
                return;
            }
            _ => {}
        }

        if self.focus == Focus::Search {
            self.search_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('/') => self.focus = Focus::Search,
            _ => match self.focus {
                Focus::Class => self.horizontal(key.code, Self::cycle_class),
                Focus::Rarity => self.horizontal(key.code, Self::cycle_rarity),
                Focus::Spec => self.horizontal(key.code, Self::cycle_spec),
                Focus::Items => self.items_key(key.code),
                Focus::Search => {}
            },
        }
    }

    fn horizontal(&mut self, code: KeyCode, cycle: fn(&mut Self, isize)) {
        match code {
            KeyCode::Left | KeyCode::Char('h') => cycle(self, -1),
            KeyCode::Right | KeyCode::Char('l') => cycle(self, 1),
            KeyCode::Down | KeyCode::Enter => self.focus = Focus::Items,
            _ => {}
        }
    }

    fn search_key(&mut self, key: KeyEvent) {
        let mut text = self.view.search_text().to_string();
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => text.push(c),
            KeyCode::Backspace => {
                text.pop();
            }
            KeyCode::Enter | KeyCode::Down => {
                self.focus = Focus::Items;
                return;
            }
            _ => return,
        }
        if self.view.set_search_text(text) {
            self.after_filter_change();
        }
    }

    fn items_key(&mut self, code: KeyCode) {
        let len = self.view.visible_len();
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor + 1 < len {
                    self.cursor += 1;
                }
            }
            KeyCode::Home | KeyCode::Char('g') => self.cursor = 0,
            KeyCode::End | KeyCode::Char('G') => self.cursor = len.saturating_sub(1),
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_expanded(),
            _ => {}
        }
    }

    /// Open the panel under the cursor, closing any other one.
    pub fn toggle_expanded(&mut self) {
        let Some(item) = self.view.visible_item(self.cursor) else {
            return;
        };
        if self.is_expanded(&item.name) {
            self.expanded = None;
        } else {
            self.expanded = Some(item.name.clone());
        }
    }

    /// Move to the neighbouring class. Filters, cursor and panel are reset.
    pub fn cycle_class(&mut self, delta: isize) {
        let names: Vec<String> = self.view.class_options().map(str::to_string).collect();
        let next = wrap(self.view.current_class_index(), delta, names.len());
        // Names come from the catalogue itself.
        if let Ok(true) = self.view.select_class(&names[next]) {
            self.cursor = 0;
            self.expanded = None;
        }
    }

    /// Step through `Any` and the rarity tiers.
    pub fn cycle_rarity(&mut self, delta: isize) {
        let options: Vec<Option<Rarity>> = std::iter::once(None)
            .chain(self.view.rarity_options().into_iter().map(Some))
            .collect();
        let current = options
            .iter()
            .position(|r| *r == self.view.rarity_filter())
            .unwrap_or(0);
        let next = options[wrap(current, delta, options.len())];
        if self.view.set_rarity_filter(next) {
            self.after_filter_change();
        }
    }

    /// Step through `Any` and the specs of the current class.
    pub fn cycle_spec(&mut self, delta: isize) {
        let options: Vec<Option<String>> = std::iter::once(None)
            .chain(self.view.spec_options().map(|s| Some(s.to_string())))
            .collect();
        let current = options
            .iter()
            .position(|s| s.as_deref() == self.view.spec_filter())
            .unwrap_or(0);
        let next = options[wrap(current, delta, options.len())].clone();
        if self.view.set_spec_filter(next.as_deref()) {
            self.after_filter_change();
        }
    }

    fn after_filter_change(&mut self) {
        let len = self.view.visible_len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use re_catalogue::Catalogue;

    use super::*;

    fn app() -> App {
        let catalogue = Arc::new(Catalogue::bundled().unwrap());
        App::new(CatalogueView::new(catalogue, "Paladin").unwrap())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_search_box_edits_text() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.focus, Focus::Search);
        type_text(&mut app, "ashq");
        assert_eq!(app.view.search_text(), "ashq");
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.view.search_text(), "ash");
        assert_eq!(app.view.visible_len(), 1);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.focus, Focus::Items);
    }

    #[test]
    fn test_class_change_resets_state() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert!(app.expanded.is_some());
        app.view.set_search_text("e");

        app.focus = Focus::Class;
        press(&mut app, KeyCode::Right);
        assert_eq!(app.view.current_class().name, "Warrior");
        assert_eq!(app.view.search_text(), "");
        assert_eq!(app.cursor, 0);
        assert!(app.expanded.is_none());

        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.view.current_class().name, "Rogue");
    }

    #[test]
    fn test_rarity_cycle_wraps_through_any() {
        let mut app = app();
        app.focus = Focus::Rarity;
        press(&mut app, KeyCode::Right);
        assert_eq!(app.view.rarity_filter(), Some(Rarity::Artifact));
        press(&mut app, KeyCode::Left);
        assert_eq!(app.view.rarity_filter(), None);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.view.rarity_filter(), Some(Rarity::Epic));
    }

    #[test]
    fn test_spec_cycle_uses_class_specs() {
        let mut app = app();
        app.focus = Focus::Spec;
        press(&mut app, KeyCode::Right);
        assert_eq!(app.view.spec_filter(), Some("Holy"));
        assert!(
            app.view
                .visible_items()
                .iter()
                .all(|i| i.specs.iter().any(|s| s == "Holy"))
        );
    }

    #[test]
    fn test_cursor_clamped_after_filtering() {
        let mut app = app();
        press(&mut app, KeyCode::End);
        assert_eq!(app.cursor, 5);
        app.focus = Focus::Rarity;
        press(&mut app, KeyCode::Right);
        assert_eq!(app.cursor, 0);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.view.rarity_filter(), None);
    }

    #[test]
    fn test_single_panel_open() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert!(app.is_expanded("Ashbringer"));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char(' '));
        assert!(!app.is_expanded("Ashbringer"));
        press(&mut app, KeyCode::Char(' '));
        assert!(app.expanded.is_none());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = self::app();
        app.focus = Focus::Search;
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
        assert_eq!(app.view.search_text(), "");
    }

    #[test]
    fn test_tab_order_wraps() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Class);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus, Focus::Items);
    }
}
