use crate::model::{Encoding, Field, InstructionType};

pub static INSTRUCTION_TYPES: &[InstructionType] = &[
    InstructionType {
        id: "r-type",
        short_name: "R",
        name: "R-Type",
        description: "R-type is named for its focus on maximizing the number of registers. It can specify up to 3 registers. All arithmetic instructions which do not use an immediate are R-Type. Since R-Type instructions do not include immediate values (except the shift amount), space is not as tight as other types. Therefore, they all use the same opcode (0x0), and have a separate funct field to differentiate from each other. Additionally, many R-type instructions do not use all 6 fields.",
        template: Encoding::R {
            opcode: "000000",
            rs: "sssss",
            rt: "ttttt",
            rd: "ddddd",
            shamt: "iiiii",
            funct: "ffffff",
        },
        fields: &[
            Field::new("opcode", 6),
            Field::new("rs", 5),
            Field::new("rt", 5),
            Field::new("rd", 5),
            Field::new("shamt", 5),
            Field::new("funct", 6),
        ],
        notes: None,
    },
    InstructionType {
        id: "i-type",
        short_name: "I",
        name: "I-Type",
        description: "I-type is named for its focus on maximizing the size of the immediate. It can specify up to 2 registers and a 16-bit immediate value. All arithmetic instructions which use an immediate, most branch instructions, and most memory instructions are I-Type. Since I-Type instructions use half their bits for the immediate value, space is tight. Therefore, each I-Type instruction has a unique opcode. Additionally, many instructions must cleverly use the immediate field to fit as much information as possible. For example, branch instructions do not have room to store a 32 bit target address. Therefore, they store the distance from the current location of the branch (divided by 4, since the distance between intructions is always a multiple of 4 bytes).",
        template: Encoding::I {
            opcode: "oooooo",
            rs: "sssss",
            rt: "ttttt",
            imm: "iiiiiiiiiiiiiiii",
        },
        fields: &[
            Field::new("opcode", 6),
            Field::new("rs", 5),
            Field::new("rt", 5),
            Field::new("imm", 16),
        ],
        notes: None,
    },
    InstructionType {
        id: "j-type",
        short_name: "J",
        name: "J-Type",
        description: "J-type is named for its focus on maximizing the possible distance of a jump. It can specify a 26-bit address. Like branch instructions, J-Type instructions do not have room to store a 32 bit target address. To 'fit' a 32 bit target into 26 bits, the target address is shifted two bits to the right (instructions are always word-aligned so the rightmost two bits are always 0), and then the upper 6 bits are discarded. When the jump is executed, the address is shifted left 2 bits, and the upper 4 bits of the current PC are added to the stored address to form a complete 32 bit target.",
        template: Encoding::J {
            opcode: "00001o",
            addr: "aaaaaaaaaaaaaaaaaaaaaaaaaa",
        },
        fields: &[
            Field::new("opcode", 6),
            Field::new("addr", 26),
        ],
        notes: None,
    },
    InstructionType {
        id: "ri-type",
        short_name: "RI",
        name: "RI-Type",
        description: "RI-type is named for its use of an extra immediate field called register immediate (regimm) in place of the rt field from the otherwise identical I-Type instruction. It can specify a single register, a 5-bit immediate, and  16-bit immediate. RI-type is mainly used in certain branch instructions which compare a single register with 0. Like R-Type instructions, all RI-type instructions use the same opcode (0x1); the regimm field is used to differentiate RI-type instructions from each other.",
        template: Encoding::Ri {
            opcode: "000001",
            rs: "sssss",
            regimm: "rrrrr",
            imm: "iiiiiiiiiiiiiiii",
        },
        fields: &[
            Field::new("opcode", 6),
            Field::new("rs", 5),
            Field::new("regimm", 5),
            Field::new("imm", 16),
        ],
        notes: Some("Since this instruction type is not used for a large number of instructions, its name and some field names are not consistent across reference sources."),
    },
    InstructionType {
        id: "cop-type",
        short_name: "COP",
        name: "COP-Type",
        description: "COP-type is named for its usage in interaction with coprocessors. The opcode is the same for all coprocessor instructions except for the last two bits, which specify the coproessor (0 - 3).",
        template: Encoding::Cop {
            opcode: "0100oo",
            funct: "fffff",
            rt: "ttttt",
            rd: "ddddd",
            addr: "aaaaaaaaaaa",
        },
        fields: &[
            Field::new("opcode", 6),
            Field::new("funct", 5),
            Field::new("rt", 5),
            Field::new("rd", 5),
            Field::new("addr", 11),
        ],
        notes: None,
    },
    InstructionType {
        id: "ic-type",
        short_name: "IC",
        name: "IC-Type",
        description: "IC-type is used for operations with immediates which test a floating point conditional.",
        template: Encoding::Ic {
            opcode: "oooooo",
            format: "fffff",
            cc: "ccc",
            cond: "cc",
            imm: "iiiiiiiiiiiiiiii",
        },
        fields: &[
            Field::new("opcode", 6),
            Field::new("format", 5),
            Field::new("cc", 3),
            Field::new("cond", 2),
            Field::new("imm", 16),
        ],
        notes: Some("Since this instruction type is not used for a large number of instructions, its name and some field names are not consistent across reference sources."),
    },
    InstructionType {
        id: "rc-type",
        short_name: "RC",
        name: "RC-Type",
        description: "RC-type is used for operations on registers which test a floating point conditional.",
        template: Encoding::Rc {
            opcode: "oooooo",
            rs: "sssss",
            cc: "ccc",
            cond: "cc",
            rd: "ddddd",
            shamt: "sssss",
            funct: "ffffff",
        },
        fields: &[
            Field::new("opcode", 6),
            Field::new("rs", 5),
            Field::new("cc", 3),
            Field::new("cond", 2),
            Field::new("rd", 5),
            Field::new("shamt", 5),
            Field::new("funct", 6),
        ],
        notes: Some("Since this instruction type is not used for a large number of instructions, its name and some field names are not consistent across reference sources."),
    },
    InstructionType {
        id: "float",
        short_name: "F",
        name: "F-Type",
        description: "F-type is used for most floating point operations.",
        template: Encoding::F {
            opcode: "010001",
            format: "fffff",
            ft: "ttttt",
            fs: "sssss",
            fd: "ddddd",
            funct: "ffffff",
        },
        fields: &[
            Field::new("opcode", 6),
            Field::new("format", 5),
            Field::new("ft", 5),
            Field::new("fs", 5),
            Field::new("fd", 5),
            Field::new("funct", 6),
        ],
        notes: None,
    },
    InstructionType {
        id: "float-conditional-operation",
        short_name: "FCO",
        name: "FCO-Type",
        description: "FCO-type is used for most floating point operations which check a conditional.",
        template: Encoding::Fco {
            opcode: "010001",
            format: "fffff",
            cc: "ccc",
            cond: "cc",
            fs: "sssss",
            fd: "ddddd",
            funct: "ffffff",
        },
        fields: &[
            Field::new("opcode", 6),
            Field::new("format", 5),
            Field::new("cc", 3),
            Field::new("cond", 2),
            Field::new("fs", 5),
            Field::new("fd", 5),
            Field::new("funct", 6),
        ],
        notes: Some("Since this instruction type is not used for a large number of instructions, its name and some field names are not consistent across reference sources."),
    },
    InstructionType {
        id: "float-conditional-test",
        short_name: "FCT",
        name: "FCT-Type",
        description: "FCT-type is used for most floating point operations which set a conditional based on a test.",
        template: Encoding::Fct {
            opcode: "010001",
            format: "fffff",
            ft: "ttttt",
            fs: "sssss",
            cc: "ccc",
            cond: "cc",
            fc: "ff",
            funct: "ffff",
        },
        fields: &[
            Field::new("opcode", 6),
            Field::new("format", 5),
            Field::new("ft", 5),
            Field::new("fs", 5),
            Field::new("cc", 3),
            Field::new("cond", 2),
            Field::new("fc", 2),
            Field::new("funct", 4),
        ],
        notes: Some("Since this instruction type is not used for a large number of instructions, its name and some field names are not consistent across reference sources."),
    },
    InstructionType {
        id: "pseudo-instruction",
        short_name: "PSEUDO",
        name: "Pseudo-Instruction",
        description: "The MIPS processor is designed to be simple, featuring a relatively small set of machine instructions (instruction which the processor can run). Pseudo-instructions are provided as a convenience for assembly language programmers for common operations that are not implemented in the processor. Unlike other instructions, which are translated by the assembler directly into a corresponding machine instruction, pseudo-instructions do not correspond directly with a single machine instruction. The pseudo-instructions are provided by the assember (the program that translates your assembly language code into a binary program in machine language). Pseudo-instructions are first translated by the assembler into one or more 'real' instructions which perform the desired operation, then these real instructions are translated to equivalent machine language.",
        template: Encoding::Pseudo { expansion: &[] },
        fields: &[],
        notes: None,
    },
];
