use dioxus::prelude::*;

use crate::vm::markdown_to_html;

const DEPLOY_GUIDE: &str = r#"
## 1. Save your model

Call `trainer.save_model("./my_model")` and `tokenizer.save_pretrained("./my_model")`
at the end of training so both weights and tokenizer land in one directory.

## 2. Write a model card

Generate a `README.md` next to the weights:

```bash
cargo run -p app -- model-card --report eval.json --model-name my-sentiment --task "Sentiment Analysis" --out ./my_model
```

## 3. Pick a host

| Option | Good for | Effort |
|---|---|---|
| HuggingFace Hub | Sharing weights with the community | Low |
| HuggingFace Spaces + Gradio | A public demo page | Low |
| FastAPI service | Your own HTTP inference endpoint | Medium |

## 4. Point the dashboard at it

Set `ACADEMY_CLASSIFIER_URL` (and `ACADEMY_CLASSIFIER_TOKEN` if the endpoint
is private), then run `cargo run -p app -- predict "I love this!"` to check the
deployed model answers.

## 5. Keep watching

- [ ] Log predictions and confidence
- [ ] Re-run the evaluation on fresh data every few weeks
- [ ] Retrain when accuracy drops
"#;

#[component]
pub fn DeployView() -> Element {
    let guide = markdown_to_html(DEPLOY_GUIDE);

    rsx! {
        div { class: "page deploy-page",
            header { class: "view-header",
                h2 { class: "view-title", "🌐 Deploy Your Model" }
                p { class: "view-subtitle", "From a notebook checkpoint to something other people can use." }
            }
            div { class: "markdown", dangerous_inner_html: "{guide}" }
        }
    }
}
