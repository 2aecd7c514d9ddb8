use dioxus::prelude::*;

use crate::content::{Skill, RING_RADIUS, SKILLS, SKILL_SEGMENTS};
use crate::hooks::use_locale;
use crate::i18n;
use crate::t;

struct SegmentView {
    key: usize,
    class: &'static str,
    style: String,
}

struct SkillRow {
    key: &'static str,
    label: String,
    level: u8,
    color: &'static str,
    icon_style: String,
    segments: Vec<SegmentView>,
    ring_dash: String,
    ring_offset: String,
}

fn skill_row(row: usize, skill: &Skill) -> SkillRow {
    let segments = (0..SKILL_SEGMENTS)
        .map(|segment| {
            let filled = skill.segment_is_filled(segment);
            let height = Skill::segment_height_pct(segment);
            let delay = Skill::segment_delay_s(row, segment);
            let background = if filled {
                format!(
                    "linear-gradient(to top, {}, {}); box-shadow: 0 0 8px {}40",
                    skill.gradient_from, skill.gradient_to, skill.gradient_from
                )
            } else {
                "#374151".to_string()
            };
            SegmentView {
                key: segment,
                class: if filled {
                    "skill-meter__bar skill-meter__bar--filled"
                } else {
                    "skill-meter__bar"
                },
                style: format!(
                    "height: {height:.1}%; animation-delay: {delay:.2}s; background: {background}"
                ),
            }
        })
        .collect();

    SkillRow {
        key: skill.key,
        label: i18n::lookup(skill.label_key),
        level: skill.level,
        color: skill.color,
        icon_style: format!("background-color: {}20; color: {}", skill.color, skill.color),
        segments,
        ring_dash: format!("{:.2}", Skill::ring_circumference()),
        ring_offset: format!("{:.2}", skill.ring_dash_offset()),
    }
}

/// Skill levels: segmented speed bar on wide screens, ring on narrow ones.
#[component]
pub fn Skills() -> Element {
    let _locale = use_locale();
    let rows: Vec<SkillRow> = SKILLS
        .iter()
        .enumerate()
        .map(|(row, skill)| skill_row(row, skill))
        .collect();
    let radius = RING_RADIUS.to_string();

    rsx! {
        section { id: "skills", class: "section section--alt skills",
            div { class: "container",
                h2 { class: "section__title", {t!("skills-title")} }

                div { class: "skills__list",
                    for SkillRow { key, label, level, color, icon_style, segments, ring_dash, ring_offset } in rows {
                        div { key: "{key}", class: "card skill-row",
                            div { class: "skill-row__label",
                                span { class: "skill-row__icon", style: "{icon_style}", aria_hidden: "true", "◆" }
                                span { class: "skill-row__name", "{label}" }
                            }

                            div { class: "skill-meter",
                                for SegmentView { key, class, style } in segments {
                                    div { key: "{key}", class: "{class}", style: "{style}" }
                                }
                            }

                            div { class: "skill-ring",
                                svg { class: "skill-ring__svg", view_box: "0 0 100 100",
                                    circle {
                                        cx: "50",
                                        cy: "50",
                                        r: "{radius}",
                                        fill: "none",
                                        stroke: "#374151",
                                        stroke_width: "8",
                                        stroke_linecap: "round",
                                    }
                                    circle {
                                        class: "skill-ring__progress",
                                        cx: "50",
                                        cy: "50",
                                        r: "{radius}",
                                        fill: "none",
                                        stroke: "{color}",
                                        stroke_width: "8",
                                        stroke_linecap: "round",
                                        stroke_dasharray: "{ring_dash}",
                                        stroke_dashoffset: "{ring_offset}",
                                    }
                                }
                                span { class: "skill-ring__value", "{level}%" }
                            }

                            span { class: "skill-row__level", style: "color: {color}", "{level}%" }
                        }
                    }
                }
            }
        }
    }
}
