use dioxus::prelude::*;

use crate::vm::markdown_to_html;

const GETTING_STARTED: &str = r"
## 🎯 Getting Started

1. **Open a notebook.** Every available lesson opens in Google Colab, no install needed.
2. **Or run locally.** Install the requirements with `pip install -r requirements.txt` and launch `jupyter lab`.
3. **Start with Module 1.** Follow along step by step and complete the exercises.
4. **Track your progress.** Mark lessons as done here and watch the sidebar fill up.
";

const TIPS: [(&str, &str); 4] = [
    ("Code along!", "Don't just read, type the code yourself."),
    ("Use Google Colab", "Free GPU access for faster training!"),
    ("Start small", "Use small datasets first, then scale up."),
    ("Experiment", "Change parameters and see what happens!"),
];

fn numbered_tips() -> impl Iterator<Item = (usize, &'static str, &'static str)> {
    TIPS.iter()
        .enumerate()
        .map(|(index, (title, body))| (index + 1, *title, *body))
}

#[component]
pub fn AboutView() -> Element {
    let guide = markdown_to_html(GETTING_STARTED);

    rsx! {
        div { class: "page about-page",
            header { class: "view-header",
                h2 { class: "view-title", "ℹ️ About This Course" }
                p { class: "view-subtitle",
                    "A hands-on path from your first pretrained model to a deployed classifier."
                }
            }
            div { class: "markdown", dangerous_inner_html: "{guide}" }
            section { class: "tips",
                h3 { "📈 Learning Tips" }
                for (number, title, body) in numbered_tips() {
                    div { key: "{number}", class: "tip",
                        strong { "💡 Tip {number}: {title}" }
                        p { "{body}" }
                    }
                }
            }
        }
    }
}
