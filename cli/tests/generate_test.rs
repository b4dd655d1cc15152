use std::fs;

use cli::commands::{check, generate};

const MANIFEST: &str = r#"
wrapper = "geometry_wrapper"
using = ["gtsam"]

[[classes]]
cpp = "gtsam::Point3"
name = "Point3"

[[classes.methods]]
name = "Expmap"
args = [{ type = "Vector", name = "v" }]
returns = [{ type = "gtsam::Point3", category = "class" }]

[[classes.methods]]
name = "Expmap"
args = [{ type = "Vector", name = "v" }, { type = "double", name = "scale" }]
returns = [{ type = "gtsam::Point3", category = "class" }]

[[classes]]
cpp = "gtsam::Pose2"
name = "Pose2"

[[classes.methods]]
name = "identity"
"#;

#[test]
fn generate_writes_all_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let manifest_path = dir.path().join("geometry.toml");
    fs::write(&manifest_path, MANIFEST).unwrap();
    let out_dir = dir.path().join("out");

    generate::generate_command(
        manifest_path.to_str().unwrap(),
        out_dir.to_str().unwrap(),
    )
    .unwrap();

    let point = fs::read_to_string(out_dir.join("Point3.m")).unwrap();
    assert!(point.starts_with("classdef Point3\n"));
    assert!(point.contains("function varargout = Expmap(varargin)"));
    // Both overloads dispatch, in declaration order.
    assert!(point.contains("geometry_wrapper(0, varargin{:})"));
    assert!(point.contains("geometry_wrapper(1, varargin{:})"));

    let pose = fs::read_to_string(out_dir.join("Pose2.m")).unwrap();
    assert!(pose.contains("geometry_wrapper(2, varargin{:})"));

    let wrapper = fs::read_to_string(out_dir.join("geometry_wrapper.cpp")).unwrap();
    assert!(wrapper.contains("using namespace gtsam;"));
    assert!(wrapper.contains("void Point3_Expmap_0"));
    assert!(wrapper.contains("void Point3_Expmap_1"));
    assert!(wrapper.contains("void Pose2_identity_2"));
    assert!(wrapper.contains("case 2: Pose2_identity_2(nargout, out, nargin-1, in+1); break;"));
}

#[test]
fn check_accepts_the_same_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let manifest_path = dir.path().join("geometry.toml");
    fs::write(&manifest_path, MANIFEST).unwrap();
    check::check_command(manifest_path.to_str().unwrap()).unwrap();
}

#[test]
fn generation_failure_writes_nothing() {
    let broken = r#"
wrapper = "w"

[[classes]]
cpp = "Bar"
name = "Bar"

[[classes.methods]]
name = "foo"
args = [{ type = "double", name = "not a name" }]
"#;
    let dir = tempfile::tempdir().unwrap();
    let manifest_path = dir.path().join("broken.toml");
    fs::write(&manifest_path, broken).unwrap();
    let out_dir = dir.path().join("out");

    let err = generate::generate_command(
        manifest_path.to_str().unwrap(),
        out_dir.to_str().unwrap(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("generation failed"));
    // The session aborted before any file was created.
    assert!(!out_dir.exists());
}

#[test]
fn missing_manifest_is_a_readable_error() {
    let err = check::check_command("/nonexistent/iface.toml").unwrap_err();
    assert!(err.to_string().contains("failed to read interface description"));
}
