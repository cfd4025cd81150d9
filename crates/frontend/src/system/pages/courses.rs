use leptos::prelude::*;

use crate::shared::components::code_display::CodeDisplay;
use crate::shared::icons::icon;

struct Lesson {
    id: u32,
    title: &'static str,
    duration: &'static str,
    completed: bool,
    current: bool,
}

struct CodeExample {
    title: &'static str,
    code: &'static str,
}

struct Resource {
    title: &'static str,
    url: &'static str,
}

const LESSONS: [Lesson; 5] = [
    Lesson { id: 1, title: "Introduction and setup", duration: "8:24", completed: true, current: false },
    Lesson { id: 2, title: "Values, types and operators", duration: "14:02", completed: true, current: false },
    Lesson { id: 3, title: "Functions and closures", duration: "18:45", completed: false, current: true },
    Lesson { id: 4, title: "Working with the DOM", duration: "21:10", completed: false, current: false },
    Lesson { id: 5, title: "Fetching data", duration: "16:33", completed: false, current: false },
];

const CODE_EXAMPLES: [CodeExample; 3] = [
    CodeExample {
        title: "Closures keep their environment",
        code: "function counter() {\n  let count = 0;\n  return function () {\n    count += 1;\n    return count;\n  };\n}\n\nconst next = counter();\nconsole.log(next()); // 1\nconsole.log(next()); // 2",
    },
    CodeExample {
        title: "Array pipelines",
        code: "const scores = [42, 91, 73, 15, 88];\n\nconst top = scores\n  .filter((s) => s >= 50)\n  .sort((a, b) => b - a)\n  .slice(0, 2);\n\nconsole.log(top); // [91, 88]",
    },
    CodeExample {
        title: "Fetching JSON",
        code: "async function loadUsers() {\n  const res = await fetch(\"/api/users\");\n  if (!res.ok) {\n    throw new Error(`HTTP ${res.status}`);\n  }\n  return res.json();\n}",
    },
];

const RESOURCES: [Resource; 3] = [
    Resource { title: "MDN JavaScript Guide", url: "https://developer.mozilla.org/en-US/docs/Web/JavaScript/Guide" },
    Resource { title: "JavaScript.info", url: "https://javascript.info" },
    Resource { title: "Eloquent JavaScript", url: "https://eloquentjavascript.net" },
];

#[component]
pub fn CoursesPage() -> impl IntoView {
    view! {
        <div class="page page--course">
            <div class="course-header">
                <h1 class="course-header__title">"Advanced JavaScript"</h1>
                <p class="course-header__meta">
                    "Instructor: Sarah Mitchell · 5 modules · 12h 30m total"
                </p>
                <div class="course-header__progress">
                    <div class="course-header__progress-bar" style="width: 40%;"></div>
                </div>
                <span class="course-header__progress-label">"2 of 5 lessons complete"</span>
            </div>

            <div class="course-body">
                <aside class="course-lessons">
                    <h2 class="course-lessons__title">"Lessons"</h2>
                    <ul class="course-lessons__list">
                        {LESSONS
                            .iter()
                            .map(|lesson| {
                                let class = if lesson.current {
                                    "lesson-item lesson-item--current"
                                } else if lesson.completed {
                                    "lesson-item lesson-item--completed"
                                } else {
                                    "lesson-item"
                                };
                                view! {
                                    <li class=class>
                                        <span class="lesson-item__status">
                                            {if lesson.completed {
                                                icon("check")
                                            } else {
                                                icon("play")
                                            }}
                                        </span>
                                        <span class="lesson-item__title">
                                            {format!("{}. {}", lesson.id, lesson.title)}
                                        </span>
                                        <span class="lesson-item__duration">{lesson.duration}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>

                    <h2 class="course-lessons__title">"Resources"</h2>
                    <ul class="course-resources">
                        {RESOURCES
                            .iter()
                            .map(|res| {
                                view! {
                                    <li class="course-resources__item">
                                        <a href=res.url target="_blank" rel="noopener">
                                            {res.title}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </aside>

                <section class="course-content">
                    <h2>"Lesson 3 — Functions and closures"</h2>
                    <p>
                        "A closure is a function bundled with the variables it could see when \
                         it was created. The examples below run unchanged in the playground; \
                         copy one over and experiment."
                    </p>
                    {CODE_EXAMPLES
                        .iter()
                        .map(|example| {
                            view! {
                                <CodeDisplay
                                    title=example.title
                                    code=example.code
                                    language="javascript"
                                />
                            }
                        })
                        .collect_view()}
                </section>
            </div>
        </div>
    }
}
