use mipslite_rs::disasm::render_trace;
use mipslite_rs::{Region, RegionSplit};
use pretty_assertions::assert_eq;

#[test]
fn classify_is_one_way() {
    let split = RegionSplit::new(2);
    assert!(split.is_enabled());
    assert_eq!(split.classify(0), Region::Instruction);
    assert_eq!(split.classify(1), Region::Instruction);
    assert_eq!(split.classify(2), Region::Memory);
    assert_eq!(split.classify(100), Region::Memory);
}

#[test]
fn zero_split_disables_the_memory_region() {
    let split = RegionSplit::new(0);
    assert!(!split.is_enabled());
    assert_eq!(split.classify(1_000_000), Region::Instruction);
}

#[test]
fn split_trace_renders_both_regions() {
    // Two instructions followed by two raw data words
    let words = [
        (2 << 21) | (3 << 16) | (1 << 11), // ADD R1 R2 R3
        0b010001 << 26,                    // HALT
        0xDEADBEEF,
        0x1F,
    ];
    let out = render_trace(&words, RegionSplit::new(2)).unwrap();
    let expected = "Line: 0\nOpcode: ADD\nRs: R2  Rt: R3\nRd: R1\n\n\
                    Line: 1\nOpcode: HALT\nRs: R0  Rt: R0\nImmediate: 0\n\n\
                    Line 2: DEADBEEF\nLine 3: 1F\n";
    assert_eq!(out, expected);
}

#[test]
fn padding_advances_the_counter_in_both_regions() {
    let words = [0, 0b010001 << 26, 0, 0x1F];
    let out = render_trace(&words, RegionSplit::new(3)).unwrap();
    assert_eq!(out, "Line: 1\nOpcode: HALT\nRs: R0  Rt: R0\nImmediate: 0\n\nLine 3: 1F\n");
}

#[test]
fn unknown_opcode_in_the_instruction_region_names_its_line() {
    let words = [0b010001 << 26, 0b111111 << 26];
    let err = render_trace(&words, RegionSplit::new(0)).unwrap_err();
    assert_eq!(err.line, 1);
}
