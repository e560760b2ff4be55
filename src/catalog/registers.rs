use crate::model::{Preservation, Register};

pub static REGISTERS: &[Register] = &[
    Register {
        id: "zero",
        name: "Zero",
        numbers: "$0",
        friendly_names: "$zero",
        description: "Constant zero value",
        preserved: Preservation::NotApplicable,
        notes: Some("This register always holds a value of zero; attempting to assign other values to it will fail."),
    },
    Register {
        id: "at",
        name: "Assembler Temporary",
        numbers: "$1",
        friendly_names: "$at",
        description: "Reserved for usage by the assembler",
        preserved: Preservation::NotApplicable,
        notes: Some("This register is reserved for use by the assembler (e.g. in expanding pseudo instructions). It should not generally by used."),
    },
    Register {
        id: "values",
        name: "(Return) Values",
        numbers: "$2 - $3",
        friendly_names: "$v0 - $v1",
        description: "Values returned from syscalls or function calls",
        preserved: Preservation::NotApplicable,
        notes: None,
    },
    Register {
        id: "arguments",
        name: "Arguments",
        numbers: "$4 - $7",
        friendly_names: "$a0 - $a3",
        description: "Arguments for syscalls or function calls",
        preserved: Preservation::Yes,
        notes: None,
    },
    Register {
        id: "temporaries-low",
        name: "Temporaries",
        numbers: "$8 - $15",
        friendly_names: "$t0 - $t7",
        description: "General use registers whose values will not be preserved across function calls",
        preserved: Preservation::No,
        notes: Some("These registers are not saved across function calls. If you call a function, you can not assume they will have the same values once the function call returns. If you are writing a function, you can overwrite the values in any of these registers."),
    },
    Register {
        id: "saves",
        name: "Saves",
        numbers: "$16 - $23",
        friendly_names: "$s0 - $s7",
        description: "General use registers whose values will be preserved across function calls",
        preserved: Preservation::Yes,
        notes: Some("These registers are saved across function calls. If you call a function, you can assume they will have the same values once the function call returns. If you are writing a function, you can not overwrite the values in any of these registers. If you need to use these registers inside a function, you must save their previous values to the stack and restore them before your function returns."),
    },
    Register {
        id: "temporaries-high",
        name: "Temporaries",
        numbers: "$24 - $25",
        friendly_names: "$t8 - $t9",
        description: "General use registers whose values will not be preserved across function calls",
        preserved: Preservation::No,
        notes: Some("These registers are not saved across function calls. If you call a function, you can not assume they will have the same values once the function call returns. If you are writing a function, you can overwrite the values in any of these registers."),
    },
    Register {
        id: "global-pointer",
        name: "Global Pointer",
        numbers: "$28",
        friendly_names: "$gp",
        description: "Used to enable efficient access to global labels",
        preserved: Preservation::Yes,
        notes: None,
    },
    Register {
        id: "stack-pointer",
        name: "Stack Pointer",
        numbers: "$29",
        friendly_names: "$sp",
        description: "Used to track the current top of the stack",
        preserved: Preservation::Yes,
        notes: None,
    },
    Register {
        id: "frame-pointer",
        name: "Frame Pointer",
        numbers: "$30",
        friendly_names: "$fp",
        description: "Used to track the location of the current frame",
        preserved: Preservation::Yes,
        notes: None,
    },
    Register {
        id: "return-address",
        name: "Return Address",
        numbers: "$31",
        friendly_names: "$ra",
        description: "Used to track the location to return to at the end of the current funciton call",
        preserved: Preservation::Yes,
        notes: None,
    },
    Register {
        id: "float",
        name: "Floating Point Registers",
        numbers: "$0 - $31",
        friendly_names: "$f0 - $f31",
        description: "A second set of 32 registers used by all floating point instructions.",
        preserved: Preservation::NoConvention,
        notes: Some("Unlike general-purpose registers (the main set of registers), there are no conventions for saving across function calls or special-purpose floating point registers. $f0 does not hold a value of zero like $0 (it can be used like any other floating point register). When working with doubles, each value uses two registers (the first of which must be an even-numbered register). These registers are located in coprocessor 1; data can be tranfered between general purpose registers and floating point registers using the mtc1 and mfc1 instructions."),
    },
    Register {
        id: "hi",
        name: "HI (Multiplication Result/Division Remainder)",
        numbers: "n/a",
        friendly_names: "n/a",
        description: "Used to store the upper 32 bits of the result from integer multiplication, or the remainder resultant from integer division",
        preserved: Preservation::NotApplicable,
        notes: Some("Cannot be accessed directly. Value can be retrieved with the mfhi instruction, or changed with the mthi instruction."),
    },
    Register {
        id: "lo",
        name: "LO (Multiplication Result/Division Quotient)",
        numbers: "n/a",
        friendly_names: "n/a",
        description: "Used to store the lower 32 bits of the result from integer multiplication, or the quotient resultant from integer division",
        preserved: Preservation::NotApplicable,
        notes: Some("Cannot be accessed directly. Value can be retrieved with the mflo instruction, or changed with the mtlo instruction."),
    },
    Register {
        id: "pc",
        name: "Program Counter",
        numbers: "n/a",
        friendly_names: "n/a",
        description: "Used to store the address of the instruction currently being executed",
        preserved: Preservation::NotApplicable,
        notes: Some("Cannot be accessed directly. Jumps and branches change this value to cause execution to move to the desired location."),
    },
];
