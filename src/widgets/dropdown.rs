use dioxus::prelude::*;

use crate::app::ThemeState;
use crate::widgets::{Button, ButtonSize, ButtonVariant};

/// Tracks which instance is open; at most one at a time. Plain state so the
/// coordination logic is testable without a UI runtime.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExclusiveOpen {
    open: Option<u32>,
    next_id: u32,
}

impl ExclusiveOpen {
    /// Hand out a fresh instance id.
    pub fn allocate(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn is_open(&self, id: u32) -> bool {
        self.open == Some(id)
    }

    pub fn open_id(&self) -> Option<u32> {
        self.open
    }

    /// Open `id`, closing whichever instance was open before; close it if it
    /// was already the open one.
    pub fn toggle(&mut self, id: u32) {
        self.open = if self.open == Some(id) { None } else { Some(id) };
    }

    pub fn close(&mut self, id: u32) {
        if self.open == Some(id) {
            self.open = None;
        }
    }
}

/// Shared dropdown coordination handle, provided through context by the app
/// root and handed to every dropdown instance.
#[derive(Clone, Copy)]
pub struct DropdownCoordinator {
    state: Signal<ExclusiveOpen>,
}

impl DropdownCoordinator {
    pub fn new() -> Self {
        DropdownCoordinator {
            state: Signal::new(ExclusiveOpen::default()),
        }
    }

    pub fn allocate(&mut self) -> u32 {
        self.state.write().allocate()
    }

    pub fn is_open(&self, id: u32) -> bool {
        self.state.read().is_open(id)
    }

    pub fn toggle(&mut self, id: u32) {
        self.state.write().toggle(id);
    }

    pub fn close(&mut self, id: u32) {
        self.state.write().close(id);
    }
}

/// Trigger button plus an anchored menu of selectable items.
#[component]
pub fn Dropdown(label: String, items: Vec<String>, on_select: EventHandler<String>) -> Element {
    let coordinator = use_context::<DropdownCoordinator>();
    let id = use_hook(|| {
        let mut handle = coordinator;
        handle.allocate()
    });
    let open = coordinator.is_open(id);

    let theme = use_context::<ThemeState>();
    let surface = theme.color("surfacecontainerhigh");
    let foreground = theme.on_color("surfacecontainerhigh");
    let outline = theme.color("outline");

    rsx! {
        div { style: "position: relative; display: inline-block;",
            Button {
                label,
                variant: ButtonVariant::Outline,
                color: "secondary".to_string(),
                size: ButtonSize::Md,
                onclick: move |_| {
                    let mut handle = coordinator;
                    handle.toggle(id);
                },
            }
            if open {
                div { style: "position: absolute; top: 100%; left: 0; z-index: 100; min-width: 160px; border-radius: 8px; overflow: hidden; background: {surface}; border: 1px solid {outline}; box-shadow: 0 4px 12px rgba(0,0,0,0.25);",
                    for item in items.clone() {
                        button {
                            style: "display: block; width: 100%; padding: 10px 16px; text-align: left; border: none; background: transparent; color: {foreground}; cursor: pointer;",
                            onclick: {
                                let choice = item.clone();
                                move |_| {
                                    let mut handle = coordinator;
                                    handle.close(id);
                                    on_select.call(choice.clone());
                                }
                            },
                            "{item}"
                        }
                    }
                }
            }
        }
    }
}
