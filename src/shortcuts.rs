//! Keyboard shortcuts (Ctrl or Cmd held).

/// Comparison view on the analysis page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Table,
    Card,
    Chart,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Table, ViewMode::Card, ViewMode::Chart];

    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Table => "Table",
            ViewMode::Card => "Cards",
            ViewMode::Chart => "Chart",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ViewMode::Table => "bi bi-table",
            ViewMode::Card => "bi bi-grid-3x3-gap",
            ViewMode::Chart => "bi bi-bar-chart",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    NewAnalysis,
    SwitchView(ViewMode),
}

/// Map a keydown to a shortcut. Plain keys never match.
pub fn match_key(key: &str, ctrl: bool, meta: bool) -> Option<Shortcut> {
    if !(ctrl || meta) {
        return None;
    }
    match key {
        "n" => Some(Shortcut::NewAnalysis),
        "1" => Some(Shortcut::SwitchView(ViewMode::Table)),
        "2" => Some(Shortcut::SwitchView(ViewMode::Card)),
        "3" => Some(Shortcut::SwitchView(ViewMode::Chart)),
        _ => None,
    }
}

/// The app shell only handles Ctrl/Cmd+N
pub fn opens_new_analysis(shortcut: Shortcut) -> bool {
    shortcut == Shortcut::NewAnalysis
}

/// View switches, handled only on the analysis page
pub fn view_switch(shortcut: Shortcut) -> Option<ViewMode> {
    match shortcut {
        Shortcut::SwitchView(mode) => Some(mode),
        Shortcut::NewAnalysis => None,
    }
}

pub fn from_event(ev: &web_sys::KeyboardEvent) -> Option<Shortcut> {
    match_key(&ev.key(), ev.ctrl_key(), ev.meta_key())
}

/// Listen for shortcuts on the whole document for the page's lifetime.
/// The handler returns whether it used the shortcut; only used keys have
/// their browser default suppressed.
pub fn bind_global<F>(on_shortcut: F)
where
    F: Fn(Shortcut) -> bool + 'static,
{
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        if from_event(&ev).is_some_and(&on_shortcut) {
            ev.prevent_default();
        }
    });

    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        let _ = doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    }
    on_keydown.forget();
}
