use calc::lang::Error;
use calc::mach::{Opcode, Program};

#[test]
fn test_listing() {
    let program = Program::from(vec![
        Opcode::LoadC(1.0),
        Opcode::LoadV("a".into()),
        Opcode::Add,
        Opcode::Set("x".into()),
    ]);
    assert_eq!(program.to_string(), "LOADC 1\nLOADV a\nADD\nSET x\n");
}

#[test]
fn test_round_trip() {
    let program = Program::from(vec![
        Opcode::LoadC(234.5),
        Opcode::LoadV("_abc".into()),
        Opcode::Div,
        Opcode::Set("y".into()),
    ]);
    assert_eq!(program.to_string().parse::<Program>(), Ok(program));
}

#[test]
fn test_blank_lines_ignored() {
    let program = "LOADC 2\n\n  \nSET x\n".parse::<Program>();
    assert_eq!(
        program,
        Ok(Program::from(vec![
            Opcode::LoadC(2.0),
            Opcode::Set("x".into())
        ]))
    );
}

#[test]
fn test_unknown_mnemonic() {
    assert_eq!(
        "LOADC 1\nFOO 2\n".parse::<Program>(),
        Err(Error::InvalidInstruction("FOO 2".into()))
    );
    assert_eq!(
        "ADD 1".parse::<Program>(),
        Err(Error::InvalidInstruction("ADD 1".into()))
    );
}
