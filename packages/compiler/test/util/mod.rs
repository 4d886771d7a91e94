#![allow(dead_code)]

/**
 * Template Test Utilities
 *
 * Fixture templates and helpers for inspecting rendered buffers.
 */
use template_emitter::{emit_template, CodeBuffer, Context, Element, ElementInfo, RegionInfo};

/// `<button on-click="inc()">Click</button><span>{{count}}</span>`
pub fn counter_template() -> Element {
    Element::new("template")
        .with_child(
            Element::new("button").with_text("Click").with_info(
                ElementInfo::new()
                    .with_field("__e0", "__e-0")
                    .with_event("click", "inc()", "__listener1"),
            ),
        )
        .with_child(
            Element::new("span").with_info(
                ElementInfo::new()
                    .with_field("__e1", "__e-1")
                    .with_content_binding("count", "__stop2"),
            ),
        )
}

/// `<template iterate="item in items"><li>{{item.name}}</li></template>`
pub fn repeated_template() -> Element {
    Element::new("template")
        .with_info(
            ElementInfo::new()
                .with_field("__e0", "__e-0")
                .with_region(RegionInfo::repeated("item", "items", "__stop1")),
        )
        .with_text("\n  ")
        .with_child(
            Element::new("li").with_info(
                ElementInfo::new()
                    .with_field("__e2", "__e-2")
                    .with_content_binding("item.name", "__stop3"),
            ),
        )
        .with_text("\n")
}

/// Emit `root` into a fresh context, panicking on structural errors.
pub fn emit(root: &Element) -> Context {
    let context = Context::new();
    emit_template(root, &context).unwrap();
    context
}

/// Rendered lines of `buffer` with indentation stripped.
pub fn lines(buffer: &CodeBuffer) -> Vec<String> {
    buffer
        .render(0)
        .lines()
        .map(|line| line.trim().to_string())
        .collect()
}

/// Index of the first line containing `needle`.
pub fn position(lines: &[String], needle: &str) -> usize {
    lines
        .iter()
        .position(|line| line.contains(needle))
        .unwrap_or_else(|| panic!("`{}` not found in:\n{}", needle, lines.join("\n")))
}

pub fn count(lines: &[String], needle: &str) -> usize {
    lines.iter().filter(|line| line.contains(needle)).count()
}
