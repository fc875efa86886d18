//! Signed-in portal dashboard: student profile, recent grades, attendance,
//! behavior reports, and upcoming events.

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use chrono::NaiveDate;
use contracts::data::dashboard::{
    attendance_summary, behavior_reports, recent_grades, student_profile, upcoming_events,
    BehaviorRating,
};
use leptos::prelude::*;

/// Badge class for a letter grade.
fn grade_badge_class(grade: &str) -> &'static str {
    match grade {
        "A+" => "badge badge--green",
        "A" => "badge badge--blue",
        "B+" => "badge badge--yellow",
        "B" => "badge badge--orange",
        _ => "badge badge--gray",
    }
}

/// Badge class for a behavior rating.
fn behavior_badge_class(rating: BehaviorRating) -> &'static str {
    match rating {
        BehaviorRating::Excellent => "badge badge--green",
        BehaviorRating::Good => "badge badge--blue",
        BehaviorRating::Average => "badge badge--yellow",
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

#[component]
pub fn ParentDashboard() -> impl IntoView {
    let ctx = use_app_context();
    let profile = student_profile();
    let attendance = attendance_summary();

    view! {
        <div class="page dashboard">
            <div class="dashboard__header">
                <div>
                    <h1 class="dashboard__title">{format!("Welcome back, {}", profile.parent_name)}</h1>
                    <p class="dashboard__subtitle">
                        {format!("Here's how {} is doing at school", profile.name)}
                    </p>
                </div>
                <button class="button button--outline" on:click=move |_| ctx.sign_out()>
                    {icon("log-out")}
                    "Sign Out"
                </button>
            </div>

            <div class="card dashboard__profile">
                <div class="dashboard__profile-badge">{icon("user")}</div>
                <div class="dashboard__profile-grid">
                    <div><span class="dashboard__label">"Student"</span>{profile.name}</div>
                    <div><span class="dashboard__label">"Student ID"</span>{profile.id}</div>
                    <div><span class="dashboard__label">"Class"</span>{profile.class_name}</div>
                    <div><span class="dashboard__label">"Section"</span>{profile.section}</div>
                    <div><span class="dashboard__label">"Roll Number"</span>{profile.roll_number}</div>
                    <div><span class="dashboard__label">"Date of Birth"</span>{profile.date_of_birth}</div>
                    <div><span class="dashboard__label">"Parent/Guardian"</span>{profile.parent_name}</div>
                    <div><span class="dashboard__label">"Contact"</span>{profile.contact_number}</div>
                </div>
            </div>

            <div class="dashboard__grid">
                <div class="card">
                    <h3 class="card__title">{icon("graduation-cap")} "Recent Grades"</h3>
                    <table class="dashboard__table">
                        <thead>
                            <tr>
                                <th>"Subject"</th>
                                <th>"Grade"</th>
                                <th>"Marks"</th>
                                <th>"Date"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {recent_grades().iter().map(|entry| view! {
                                <tr>
                                    <td>{entry.subject}</td>
                                    <td><span class=grade_badge_class(entry.grade)>{entry.grade}</span></td>
                                    <td>{entry.marks}</td>
                                    <td>{format_date(entry.date)}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>

                <div class="dashboard__side">
                    <div class="card">
                        <h3 class="card__title">{icon("calendar")} "Attendance"</h3>
                        <div class="dashboard__attendance">
                            <div class="dashboard__attendance-row">
                                <span>"Present"</span>
                                <span class="dashboard__figure dashboard__figure--good">
                                    {attendance.present}
                                </span>
                            </div>
                            <div class="dashboard__attendance-row">
                                <span>"Absent"</span>
                                <span class="dashboard__figure dashboard__figure--bad">
                                    {attendance.absent}
                                </span>
                            </div>
                            <div class="dashboard__attendance-row">
                                <span>"Total Days"</span>
                                <span class="dashboard__figure">{attendance.total_days}</span>
                            </div>
                            <div class="dashboard__attendance-row dashboard__attendance-row--total">
                                <span>"Attendance Rate"</span>
                                <span class="dashboard__figure">
                                    {format!("{}%", attendance.percentage)}
                                </span>
                            </div>
                        </div>
                    </div>

                    <div class="card">
                        <h3 class="card__title">{icon("star")} "Behavior Reports"</h3>
                        <ul class="dashboard__reports">
                            {behavior_reports().iter().map(|report| view! {
                                <li class="dashboard__report">
                                    <div class="dashboard__report-head">
                                        <span class=behavior_badge_class(report.rating)>
                                            {report.rating.as_str()}
                                        </span>
                                        <span class="dashboard__report-date">
                                            {format_date(report.date)}
                                        </span>
                                    </div>
                                    <p class="dashboard__report-note">{report.note}</p>
                                    <p class="dashboard__report-teacher">{report.teacher}</p>
                                </li>
                            }).collect_view()}
                        </ul>
                    </div>

                    <div class="card">
                        <h3 class="card__title">{icon("clock")} "Upcoming Events"</h3>
                        <ul class="dashboard__events">
                            {upcoming_events().iter().map(|event| view! {
                                <li class="dashboard__event">
                                    <span class="dashboard__event-date">{format_date(event.date)}</span>
                                    <span class="dashboard__event-title">{event.title}</span>
                                    <span class="dashboard__event-time">{event.time}</span>
                                </li>
                            }).collect_view()}
                        </ul>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_badges() {
        assert_eq!(grade_badge_class("A+"), "badge badge--green");
        assert_eq!(grade_badge_class("A"), "badge badge--blue");
        assert_eq!(grade_badge_class("B+"), "badge badge--yellow");
        assert_eq!(grade_badge_class("B"), "badge badge--orange");
        assert_eq!(grade_badge_class("C"), "badge badge--gray");
    }

    #[test]
    fn behavior_badges() {
        assert_eq!(behavior_badge_class(BehaviorRating::Excellent), "badge badge--green");
        assert_eq!(behavior_badge_class(BehaviorRating::Average), "badge badge--yellow");
    }
}
