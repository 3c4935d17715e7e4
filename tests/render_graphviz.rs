//! Rendering through a real Graphviz install
//!
//! Every test here returns early when `dot` is not on PATH.

mod common;

use common::graphviz_available;
use portal_erd::{Diagram, ErdError, Format, GraphvizEngine, LayoutEngine, Schema};

const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

#[test]
fn user_and_seeker_render_to_nonempty_png() {
    if !graphviz_available() {
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.png");

    let mut diagram = Diagram::new();
    diagram.add_node("User", "User\n----------\nUserID (PK)").unwrap();
    diagram.add_node("JobSeeker", "JobSeeker\n----------\nSeekerID (PK, FK)").unwrap();
    diagram.add_edge("User", "JobSeeker").unwrap();

    let out = diagram.render(&path, Format::Png, false).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(!bytes.is_empty());
    assert_eq!(out.bytes, bytes.len());
    assert!(bytes.starts_with(PNG_MAGIC));
}

#[test]
fn job_portal_renders_as_png_and_svg() {
    if !graphviz_available() {
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let diagram = Schema::job_portal().to_diagram().unwrap();

    let png = dir.path().join("online_job_portal_erd.png");
    diagram.render(&png, Format::Png, false).unwrap();
    assert!(std::fs::metadata(&png).unwrap().len() > 0);

    let svg = dir.path().join("online_job_portal_erd.svg");
    diagram.render(&svg, Format::Svg, false).unwrap();
    let text = std::fs::read_to_string(&svg).unwrap();
    assert!(text.contains("<svg"));
    assert!(text.contains("InterviewStatus"));
}

#[test]
fn rerendering_is_byte_identical() {
    if !graphviz_available() {
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let diagram = Schema::job_portal().to_diagram().unwrap();
    let a = dir.path().join("a.gv");
    let b = dir.path().join("b.gv");

    diagram.render(&a, Format::Gv, false).unwrap();
    diagram.render(&b, Format::Gv, false).unwrap();

    assert_eq!(std::fs::read(a).unwrap(), std::fs::read(b).unwrap());
}

#[test]
fn malformed_dot_is_rejected_by_engine() {
    if !graphviz_available() {
        return;
    }
    let err = GraphvizEngine::new()
        .layout("digraph { \"a\" -> ", Format::Png)
        .unwrap_err();
    assert!(matches!(err, ErdError::Render(ref m) if m.contains("rejected")));
}
