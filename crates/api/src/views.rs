//! Server-rendered HTML for the public quiz pages.

use maud::{html, Markup, DOCTYPE};

use crate::context::{
    QuestionListContext, QuizDetailContext, QuizListContext, SolutionItem, SolutionsContext,
};

/// Shared page shell.
fn layout(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | MCQuiz" }
            }
            body {
                nav { a href="/" { "Quizzes" } }
                main class="container" { (body) }
            }
        }
    }
}

pub fn quiz_list(ctx: &QuizListContext) -> Markup {
    layout(
        "Quizzes",
        html! {
            h1 { "Quizzes" }
            @if ctx.quizzes.is_empty() {
                p { "No quizzes yet." }
            } @else {
                ul class="quiz-list" {
                    @for quiz in &ctx.quizzes {
                        li {
                            a href={ "/" (quiz.id) "/" (quiz.url) } { (quiz.title) }
                            " "
                            small { "(" (quiz.number_of_questions) " questions)" }
                        }
                    }
                }
            }
        },
    )
}

pub fn quiz_detail(ctx: &QuizDetailContext) -> Markup {
    let quiz = &ctx.quiz;
    layout(
        &quiz.title,
        html! {
            h1 { (quiz.title) }
            p class="description" { (quiz.description) }
            dl {
                dt { "Questions" }
                dd { (quiz.number_of_questions) }
                dt { "Pass mark" }
                dd { (quiz.pass_mark) "%" }
            }
            a class="btn" href={ "/" (quiz.id) "/" (quiz.url) "/questions" } { "Start quiz" }
        },
    )
}

pub fn question_list(ctx: &QuestionListContext) -> Markup {
    layout(
        &ctx.title,
        html! {
            h1 { (ctx.title) }
            form method="get" action={ "/" (ctx.pk) "/" (ctx.url) "/solutions" } {
                @for (index, question) in ctx.questions.iter().enumerate() {
                    fieldset class="question" {
                        legend { (index + 1) ". " (question.content) }
                        @if let Some(figure) = &question.figure {
                            img class="figure" src=(figure) alt="Question figure";
                        }
                        @for answer in &question.answers {
                            label {
                                input type="radio" name=(question.id) value=(answer.id);
                                " " (answer.content)
                            }
                            br;
                        }
                    }
                }
                button type="submit" { "Submit answers" }
            }
        },
    )
}

fn choice_class(item: &SolutionItem, choice_id: &str) -> &'static str {
    if choice_id == item.answer {
        "text-success"
    } else if item.guess.as_deref() == Some(choice_id) {
        "text-danger"
    } else {
        ""
    }
}

pub fn solutions(ctx: &SolutionsContext) -> Markup {
    let card = &ctx.scorecard;
    layout(
        "Results",
        html! {
            h1 { "Results" }
            table class="table score" {
                tbody {
                    tr { th { "Total Correct" } td class="text-end" { (card.total) } }
                    tr { th { "Total Incorrect" } td class="text-end" { (card.errors) } }
                    tr { th { "Questions" } td class="text-end" { (card.number) } }
                    tr { th { "Score" } td class="text-end" { (format!("{:.1}", card.score)) "%" } }
                }
            }
            @for item in &ctx.questions {
                @let status = if item.is_correct() { "solution correct" } else { "solution incorrect" };
                section class=(status) {
                    h2 { (item.content) }
                    @if let Some(figure) = &item.figure {
                        img class="figure" src=(figure) alt="Question figure";
                    }
                    ul {
                        @for choice in &item.choices {
                            li class=(choice_class(item, &choice.id)) { (choice.content) }
                        }
                    }
                    @if item.guess.is_none() {
                        p class="text-muted" { "Not answered." }
                    }
                    @if let Some(reason) = &item.reason {
                        p class="reason" { (reason) }
                    }
                }
            }
            a href="/" { "Back to quizzes" }
        },
    )
}
