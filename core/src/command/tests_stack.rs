use super::*;
use crate::slab::{BooleanOp, HeightInterval, PlanError, SlabSpec};

fn intervals(pairs: &[(f64, f64)]) -> Vec<HeightInterval> {
    pairs
        .iter()
        .map(|&(low, high)| HeightInterval::new(low, high).unwrap())
        .collect()
}

#[test]
fn test_default_stack_command_line() {
    let list = intervals(&[(-1.0, 0.0), (0.0, 4.0), (4.0, 4.1)]);
    let built = build_stack_command(&list, &StackParams::default()).unwrap();

    let slab = |z: &str| format!("-platonic faces=6 vox=0.020 scale=2.000 center=0.0,0.0,{z}");
    let expected = [
        "vdb_tool".to_string(),
        slab("-1.0"),
        slab("0.0"),
        "-intersection vdb=0,1 keep=0".to_string(),
        slab("1.0"),
        slab("3.0"),
        "-union vdb=0,1 keep=0".to_string(),
        slab("1.0"),
        "-union vdb=0,1 keep=0".to_string(),
        slab("3.1"),
        slab("5.0"),
        "-intersection vdb=0,1 keep=0".to_string(),
        "-print".to_string(),
        "-o test0.vdb vdb=0 keep=1".to_string(),
        "-o test1.vdb vdb=1 keep=1".to_string(),
        "-o test2.vdb vdb=2 keep=1".to_string(),
    ];

    assert_eq!(built.command.tokens(), &expected[..]);
    assert_eq!(built.command.join(), expected.join(" "));
    assert_eq!(built.exports, vec!["test0.vdb", "test1.vdb", "test2.vdb"]);
    assert_eq!(built.plans.len(), 3);
}

#[test]
fn test_print_precedes_one_export_per_interval() {
    let list = intervals(&[(0.0, 2.0), (2.0, 9.0)]);
    let built = build_stack_command(&list, &StackParams::default()).unwrap();
    let tokens = built.command.tokens();

    let print_at = tokens.iter().position(|t| t == "-print").unwrap();
    let exports: Vec<_> = tokens[print_at + 1..].iter().collect();
    assert_eq!(exports.len(), list.len());
    assert!(exports.iter().all(|t| t.starts_with("-o ")));
    assert_eq!(tokens.iter().filter(|t| *t == "-print").count(), 1);
}

#[test]
fn test_custom_program_prefix_and_precision() {
    let params = StackParams {
        program: "/opt/vdb/bin/vdb_tool".to_string(),
        voxel_size: 0.5,
        side: 20.0,
        export_prefix: "layer".to_string(),
        style: FlagStyle {
            center_precision: 3,
            ..FlagStyle::default()
        },
    };
    let built = build_stack_command(&intervals(&[(-20.0, 0.0)]), &params).unwrap();

    assert_eq!(
        built.command.join(),
        "/opt/vdb/bin/vdb_tool \
         -platonic faces=6 vox=0.500 scale=20.000 center=0.000,0.000,-10.000 \
         -print -o layer0.vdb vdb=0 keep=1"
    );
}

#[test]
fn test_empty_interval_list_only_prints() {
    let built = build_stack_command(&[], &StackParams::default()).unwrap();
    assert_eq!(built.command.join(), "vdb_tool -print");
    assert!(built.exports.is_empty());
}

#[test]
fn test_invalid_side_aborts_build() {
    let params = StackParams {
        side: 0.0,
        ..StackParams::default()
    };
    let err = build_stack_command(&intervals(&[(0.0, 1.0)]), &params).unwrap_err();
    assert_eq!(err, PlanError::InvalidSide(0.0));
}

#[test]
fn test_op_flags() {
    let slab = VdbOp::Platonic(SlabSpec::new(0.02, 2.0, -0.5));
    assert_eq!(
        slab.to_string(),
        "-platonic faces=6 vox=0.020 scale=2.000 center=0.0,0.0,-0.5"
    );
    assert_eq!(VdbOp::Boolean(BooleanOp::Union).to_string(), "-union vdb=0,1 keep=0");
    assert_eq!(
        VdbOp::Boolean(BooleanOp::Intersection).to_string(),
        "-intersection vdb=0,1 keep=0"
    );
    assert_eq!(
        VdbOp::Write { file: "out.vdb".into(), index: 4 }.to_string(),
        "-o out.vdb vdb=4 keep=1"
    );
}

#[test]
fn test_token_sequence_builder() {
    let mut seq = TokenSequence::new("vdb_render");
    seq.push("a.vdb").push("b.ppm");
    let seq = seq.with("-v");

    assert_eq!(seq.program(), "vdb_render");
    assert_eq!(seq.flag_count(), 3);
    assert_eq!(seq.to_string(), "vdb_render a.vdb b.ppm -v");
}
