use dioxus::prelude::*;

use crate::core::content::IconKind;

#[component]
pub fn Icon(kind: IconKind) -> Element {
    let paths: &[&str] = match kind {
        IconKind::Pool => &[
            "M4 17c2 1.5 4 1.5 6 0s4-1.5 6 0 4 1.5 6 0",
            "M4 13c2 1.5 4 1.5 6 0s4-1.5 6 0 4 1.5 6 0",
            "M6 6h8",
            "M10 6v8",
        ],
        IconKind::Wrench => &[
            "M21 3l-7 7",
            "M8 14l-5 5",
            "M18 2a4 4 0 01-6 4L3 15l6 6 11-9a4 4 0 00-2-10z",
        ],
        IconKind::Glass => &["M3 5a2 2 0 012-2h14a2 2 0 012 2v14a2 2 0 01-2 2H5a2 2 0 01-2-2z", "M12 3v18M3 9h18M7 3v6M17 3v6"],
        IconKind::Porch => &["M3 10l9-7 9 7", "M5 10v10h14V10", "M9 21v-8h6v8"],
        IconKind::Carport => &[
            "M2 10l10-6 10 6",
            "M4 10v8a2 2 0 002 2h12a2 2 0 002-2v-8",
            "M7 20v-6h10v6",
        ],
    };

    rsx! {
        svg {
            class: "icon",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            "aria-hidden": "true",
            for d in paths.iter() {
                path { key: "{d}", d: "{d}" }
            }
        }
    }
}

#[component]
pub fn PhoneGlyph() -> Element {
    rsx! {
        svg { class: "icon icon--small", view_box: "0 0 24 24", fill: "currentColor", "aria-hidden": "true",
            path { d: "M2.25 6.75a.75.75 0 01.75-.75h2.508a.75.75 0 01.705.49l1.2 3.2a.75.75 0 01-.189.817l-1.59 1.59a16.5 16.5 0 006.008 6.008l1.59-1.59a.75.75 0 01.817-.189l3.2 1.2a.75.75 0 01.49.705V21a.75.75 0 01-.75.75h-1.5C8.708 21.75 2.25 15.292 2.25 7.5v-1.5z" }
        }
    }
}

#[component]
pub fn MailGlyph() -> Element {
    rsx! {
        svg { class: "icon icon--small", view_box: "0 0 24 24", fill: "none", stroke: "currentColor", stroke_width: "2", "aria-hidden": "true",
            path { d: "M2 6a2 2 0 012-2h16a2 2 0 012 2v12a2 2 0 01-2 2H4a2 2 0 01-2-2V6zm2 0l8 6 8-6" }
        }
    }
}

#[component]
pub fn ChatGlyph() -> Element {
    rsx! {
        svg { class: "icon", view_box: "0 0 24 24", fill: "currentColor", "aria-hidden": "true",
            path { d: "M12 2a10 10 0 00-8.66 15.01L2 22l5.12-1.31A10 10 0 1012 2zm0 18a8 8 0 01-4.08-1.12l-.29-.17-3.04.78.81-2.96-.19-.3A8 8 0 1112 20z" }
        }
    }
}
