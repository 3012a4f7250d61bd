use crate::model::{Availability, Difficulty, LessonDraft, ModuleDraft};

const NOTEBOOK_BASE: &str =
    "https://colab.research.google.com/github/gouthamgo/FineTuning/blob/main/lessons";

fn published(
    id: &str,
    title: &str,
    duration: &str,
    difficulty: Difficulty,
    description: &str,
    icon: &str,
    notebook: &str,
) -> LessonDraft {
    LessonDraft {
        id: id.to_owned(),
        title: title.to_owned(),
        duration: duration.to_owned(),
        difficulty,
        description: description.to_owned(),
        icon: icon.to_owned(),
        link: format!("{NOTEBOOK_BASE}/{notebook}"),
        availability: Availability::Available,
        featured: false,
    }
}

fn upcoming(
    id: &str,
    title: &str,
    duration: &str,
    difficulty: Difficulty,
    description: &str,
    icon: &str,
) -> LessonDraft {
    LessonDraft {
        id: id.to_owned(),
        title: title.to_owned(),
        duration: duration.to_owned(),
        difficulty,
        description: description.to_owned(),
        icon: icon.to_owned(),
        link: String::new(),
        availability: Availability::ComingSoon,
        featured: false,
    }
}

fn module(
    key: &str,
    title: &str,
    emoji: &str,
    subtitle: &str,
    duration: &str,
    lessons: Vec<LessonDraft>,
) -> ModuleDraft {
    ModuleDraft {
        key: key.to_owned(),
        title: title.to_owned(),
        emoji: emoji.to_owned(),
        subtitle: subtitle.to_owned(),
        duration: duration.to_owned(),
        lessons,
    }
}

#[allow(clippy::too_many_lines)]
pub(super) fn modules() -> Vec<ModuleDraft> {
    let mut first_finetune = published(
        "m2l1",
        "ACTUALLY Fine-Tune Your First Model! 🎉",
        "2 hours",
        Difficulty::Beginner,
        "This is THE lesson! You'll train your own AI model from scratch. Watch it learn in real-time.",
        "⚡",
        "module2_first_training/01_first_finetuning.ipynb",
    );
    first_finetune.featured = true;

    vec![
        module(
            "module1",
            "🌱 Foundations",
            "🟢",
            "Start your journey - understand the basics",
            "Week 1",
            vec![
                published(
                    "m1l1",
                    "What Even is Fine-Tuning?",
                    "30 min",
                    Difficulty::SuperBeginner,
                    "What is this fine-tuning thing everyone talks about? Explained without jargon.",
                    "💡",
                    "module1_foundations/01_what_is_finetuning.ipynb",
                ),
                published(
                    "m1l2",
                    "Your First AI Model",
                    "1 hour",
                    Difficulty::Beginner,
                    "Load a real pretrained model and make it work, step by step.",
                    "🤖",
                    "module1_foundations/02_your_first_model.ipynb",
                ),
                published(
                    "m1l3",
                    "Understanding Your Data",
                    "1 hour",
                    Difficulty::Beginner,
                    "Data is like ingredients for cooking. Learn how to prepare it before training.",
                    "📊",
                    "module1_foundations/03_understanding_data.ipynb",
                ),
            ],
        ),
        module(
            "module2",
            "🚀 Your First Fine-Tuning",
            "🟡",
            "This is where the magic happens!",
            "Week 2",
            vec![
                first_finetune,
                published(
                    "m2l2",
                    "Making Your Model Better (Hyperparameter Tuning)",
                    "1.5 hours",
                    Difficulty::Intermediate,
                    "Experiment with learning rates, batch sizes and more to go from good to great.",
                    "🎛️",
                    "module2_first_training/02_hyperparameter_tuning.ipynb",
                ),
                published(
                    "m2l3",
                    "Debugging Like a Pro (When Things Go Wrong)",
                    "1 hour",
                    Difficulty::Intermediate,
                    "Fix the most common training errors fast.",
                    "🔧",
                    "module2_first_training/03_debugging_training.ipynb",
                ),
            ],
        ),
        module(
            "module3",
            "🎯 Advanced Techniques",
            "🔵",
            "Level up your skills!",
            "Week 3",
            vec![
                upcoming(
                    "m3l1",
                    "LoRA & QLoRA (Train Huge Models on Free GPUs)",
                    "1.5 hours",
                    Difficulty::Advanced,
                    "Train models with billions of parameters using parameter-efficient tricks.",
                    "🚀",
                ),
                upcoming(
                    "m3l2",
                    "Multi-Task Learning (One Model, Many Jobs)",
                    "1.5 hours",
                    Difficulty::Advanced,
                    "Train one model to handle several tasks at once.",
                    "🎨",
                ),
                upcoming(
                    "m3l3",
                    "Custom Loss Functions",
                    "1 hour",
                    Difficulty::Advanced,
                    "When the default loss is not enough, write your own.",
                    "🎲",
                ),
            ],
        ),
        module(
            "module4",
            "💼 Real-World Projects",
            "🟠",
            "Build something awesome!",
            "Week 4",
            vec![
                upcoming(
                    "m4l1",
                    "Project: Build a Smart Customer Support Bot",
                    "3 hours",
                    Difficulty::Intermediate,
                    "Fine-tune a model to answer customer questions from your company docs.",
                    "💬",
                ),
                upcoming(
                    "m4l2",
                    "Project: Create a Code Review Assistant",
                    "3 hours",
                    Difficulty::Advanced,
                    "Train a model to review code, catch bugs and suggest improvements.",
                    "💻",
                ),
            ],
        ),
        module(
            "module5",
            "🌐 Deployment & Production",
            "🟣",
            "Ship it to the world!",
            "Week 5",
            vec![
                upcoming(
                    "m5l1",
                    "Deploy Your Model",
                    "2 hours",
                    Difficulty::Intermediate,
                    "From notebook to the cloud with Spaces, Gradio or an HTTP API.",
                    "🚀",
                ),
                upcoming(
                    "m5l2",
                    "Monitoring & Improving",
                    "1.5 hours",
                    Difficulty::Advanced,
                    "Track performance, handle errors and keep improving a deployed model.",
                    "📊",
                ),
            ],
        ),
    ]
}
