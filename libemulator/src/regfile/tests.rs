use libisa::{REGISTER_COUNT, STACK_BASE, STACK_POINTER};

use super::{RegFile, RegisterError};

#[test]
fn stack_pointer_starts_at_base() {
    let reg_file = RegFile::new();

    assert_eq!(reg_file.sp(), STACK_BASE);
    assert_eq!(reg_file.register(STACK_POINTER), Ok(STACK_BASE));
    assert!(reg_file.iter().take(STACK_POINTER).all(|value| *value == 0));
}

#[test]
fn every_register_is_writable() {
    let mut reg_file = RegFile::new();

    for index in 0..REGISTER_COUNT {
        reg_file.set(index, index as u8 * 10).unwrap();
    }

    for index in 0..REGISTER_COUNT {
        assert_eq!(reg_file.register(index), Ok(index as u8 * 10));
    }

    // Writing R7 directly moves the stack pointer.
    assert_eq!(reg_file.sp(), 70);
}

#[test]
fn invalid_register() {
    let mut reg_file = RegFile::new();

    assert_eq!(
        reg_file.register(REGISTER_COUNT),
        Err(RegisterError::InvalidRegister(REGISTER_COUNT))
    );
    assert_eq!(reg_file.set(200, 1), Err(RegisterError::InvalidRegister(200)));
    assert_eq!(RegFile::check_index(8), Err(RegisterError::InvalidRegister(8)));
    assert_eq!(RegFile::check_index(7), Ok(()));
}
