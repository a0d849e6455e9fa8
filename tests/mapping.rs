use std::str::FromStr;

use mipslite_rs::{Category, Layout, Mnemonic};
use pretty_assertions::assert_eq;
use strum::IntoEnumIterator;

#[test]
fn opcode_mapping_is_a_bijection() {
    for m in Mnemonic::iter() {
        let op = m.opcode();
        assert!(op <= 0b010001);
        assert_eq!(Mnemonic::try_from(op).unwrap(), m);
        let name: &'static str = m.into();
        assert_eq!(Mnemonic::from_str(name).unwrap(), m);
    }
    assert_eq!(Mnemonic::iter().count(), 18);
}

#[test]
fn register_form_is_exactly_six() {
    let regs: Vec<Mnemonic> =
        Mnemonic::iter().filter(|m| m.layout() == Layout::Register).collect();
    assert_eq!(
        regs,
        vec![
            Mnemonic::Add,
            Mnemonic::Sub,
            Mnemonic::Mul,
            Mnemonic::Or,
            Mnemonic::And,
            Mnemonic::Xor,
        ]
    );
}

#[test]
fn categories_partition_the_table() {
    use Mnemonic::*;
    let expected = [
        (Add, Category::Arithmetic),
        (Muli, Category::Arithmetic),
        (Ori, Category::Logical),
        (Xor, Category::Logical),
        (Ldw, Category::MemoryAccess),
        (Stw, Category::MemoryAccess),
        (Bz, Category::ControlFlow),
        (Jr, Category::ControlFlow),
        (Halt, Category::ControlFlow),
    ];
    for (m, c) in expected {
        assert_eq!(m.category(), c);
    }
}

#[test]
fn absent_entries_are_rejected() {
    assert!(Mnemonic::try_from(0b010010).is_err());
    assert!(Mnemonic::try_from(0b111111).is_err());
    assert!(Mnemonic::from_str("FOO").is_err());
    assert!(Mnemonic::from_str("add").is_err());
}
