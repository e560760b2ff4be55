use crate::model::{Category, Encoding, Instruction};

pub static INSTRUCTIONS: &[Instruction] = &[
    Instruction {
        id: "move",
        mnemonic: "move",
        name: "Move",
        description: "Move a value from one register to another",
        usage: "move $t, $s",
        result: "t = s",
        category: Category::Misc,
        encoding: Encoding::Pseudo {
            expansion: &[
                "addiu $t, $s, 0",
            ],
        },
        notes: None,
        tags: &["copy"],
    },
    Instruction {
        id: "movn",
        mnemonic: "movn",
        name: "Move on Not Zero",
        description: "Move a value if a register is not zero",
        usage: "movn $d, $s, $t",
        result: "if (t != 0) d = s;",
        category: Category::Misc,
        encoding: Encoding::R {
            opcode: "000000",
            rs: "sssss",
            rt: "ttttt",
            rd: "ddddd",
            shamt: "-----",
            funct: "001011",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "movz",
        mnemonic: "movz",
        name: "Move On Zero",
        description: "Move a value if a register is zero",
        usage: "movz $d, $s, $t",
        result: "if (t == 0) d = s;",
        category: Category::Misc,
        encoding: Encoding::R {
            opcode: "000000",
            rs: "sssss",
            rt: "ttttt",
            rd: "ddddd",
            shamt: "-----",
            funct: "001010",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "movf",
        mnemonic: "movf",
        name: "Move on Floating Point Conditional False",
        description: "Move a value if a floating point conditional is false",
        usage: "movf $d, $s, cc",
        result: "if (!floating point conditional cc) d = s;",
        category: Category::Misc,
        encoding: Encoding::Rc {
            opcode: "000000",
            rs: "sssss",
            cc: "ccc",
            cond: "00",
            rd: "ddddd",
            shamt: "-----",
            funct: "000001",
        },
        notes: Some("The condition code flag specifies which of the 8 condition codes to check. If it is omitted, 0 is the default."),
        tags: &[],
    },
    Instruction {
        id: "movt",
        mnemonic: "movt",
        name: "Move on Floating Point Conditional True",
        description: "Move a value if a floating point conditional is true",
        usage: "movt $d, $s, cc",
        result: "if (floating point conditional cc) d = s;",
        category: Category::Misc,
        encoding: Encoding::Rc {
            opcode: "000000",
            rs: "sssss",
            cc: "ccc",
            cond: "01",
            rd: "ddddd",
            shamt: "-----",
            funct: "000001",
        },
        notes: Some("The condition code flag specifies which of the 8 condition codes to check. If it is omitted, 0 is the default."),
        tags: &[],
    },
    Instruction {
        id: "li",
        mnemonic: "li",
        name: "Load Immediate",
        description: "Load an immediate value into a register",
        usage: "li $t, imm",
        result: "t = imm",
        category: Category::Misc,
        encoding: Encoding::Pseudo {
            expansion: &[
                "lui $t, imm[31-16]",
                "ori $t, $t, imm[15-0]",
            ],
        },
        notes: Some("Since this instruction is commonly used to initialize a register before first use, it is a good idea to leave a comment saying what the register will be used for or the meaning of the constant value."),
        tags: &["initialize", "constant"],
    },
    Instruction {
        id: "lui",
        mnemonic: "lui",
        name: "Load Upper Immediate",
        description: "Load an immediate value into the upper 16 bits of a register",
        usage: "lui $t, imm",
        result: "t = imm << 16",
        category: Category::Misc,
        encoding: Encoding::I {
            opcode: "001111",
            rs: "-----",
            rt: "ttttt",
            imm: "iiiiiiiiiiiiiiii",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "la",
        mnemonic: "la",
        name: "Load Address",
        description: "Load a label's address into a register",
        usage: "la $t, label",
        result: "t = label",
        category: Category::Misc,
        encoding: Encoding::Pseudo {
            expansion: &[
                "lui $t, label[31-16]",
                "ori $t, $t, label[15-0]",
            ],
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "syscall",
        mnemonic: "syscall",
        name: "Syscall",
        description: "Request an operation from the system",
        usage: "syscall",
        result: "<depends>",
        category: Category::Misc,
        encoding: Encoding::R {
            opcode: "000000",
            rs: "-----",
            rt: "-----",
            rd: "-----",
            shamt: "-----",
            funct: "001100",
        },
        notes: Some("Syscall can be used for console IO, memory allocation, program termination, and other tasks. See syscall reference for details."),
        tags: &[],
    },
    Instruction {
        id: "break",
        mnemonic: "break",
        name: "Break",
        description: "Cause exception with specified code",
        usage: "break n",
        result: "An exception is thrown with code n",
        category: Category::Misc,
        encoding: Encoding::R {
            opcode: "000000",
            rs: "-----",
            rt: "-----",
            rd: "-----",
            shamt: "-----",
            funct: "001101",
        },
        notes: Some("Code 1 is reserved for the debugger."),
        tags: &[],
    },
    Instruction {
        id: "nop",
        mnemonic: "nop",
        name: "No Operation",
        description: "Do nothing for a cycle",
        usage: "nop",
        result: "<no effect>",
        category: Category::Misc,
        encoding: Encoding::Pseudo {
            expansion: &[
                "sll $0, $0, 0",
            ],
        },
        notes: Some("Used to make the processor do nothing for a cycle. For example, a nop may be used after a branch to delay the next instruction until the branch result is computed. The equivalent instruction is a shift of 0 places on an unassignable register (which does nothing), and is easily identified by its binary encoding: 00000000000000000000000000000000."),
        tags: &[],
    },
    Instruction {
        id: "add",
        mnemonic: "add",
        name: "Add",
        description: "Add two registers",
        usage: "add $d, $s, $t",
        result: "d = s + t",
        category: Category::Arithmetic,
        encoding: Encoding::R {
            opcode: "000000",
            rs: "sssss",
            rt: "ttttt",
            rd: "ddddd",
            shamt: "-----",
            funct: "100000",
        },
        notes: None,
        tags: &["add", "addition", "plus"],
    },
    Instruction {
        id: "addu",
        mnemonic: "addu",
        name: "Add Unsigned",
        description: "Add two registers without overflow",
        usage: "addu $d, $s, $t",
        result: "d = s + t",
        category: Category::Arithmetic,
        encoding: Encoding::R {
            opcode: "000000",
            rs: "sssss",
            rt: "ttttt",
            rd: "ddddd",
            shamt: "-----",
            funct: "100001",
        },
        notes: None,
        tags: &["add", "addition", "plus"],
    },
    Instruction {
        id: "addi",
        mnemonic: "addi",
        name: "Add Immediate",
        description: "Add a register and an immediate",
        usage: "addi $t, $s, imm",
        result: "t = s + imm",
        category: Category::Arithmetic,
        encoding: Encoding::I {
            opcode: "001000",
            rs: "sssss",
            rt: "ttttt",
            imm: "iiiiiiiiiiiiiiii",
        },
        notes: None,
        tags: &["add", "addition", "plus"],
    },
    Instruction {
        id: "addiu",
        mnemonic: "addiu",
        name: "Add Immediate Unsigned",
        description: "Add a register and an immediate without overflow",
        usage: "addiu $t, $s, imm",
        result: "t = s + imm",
        category: Category::Arithmetic,
        encoding: Encoding::I {
            opcode: "001001",
            rs: "sssss",
            rt: "ttttt",
            imm: "iiiiiiiiiiiiiiii",
        },
        notes: None,
        tags: &["add", "addition", "plus"],
    },
    Instruction {
        id: "sub",
        mnemonic: "sub",
        name: "Subtract",
        description: "Subtract one register from another register",
        usage: "sub $d, $s, $t",
        result: "d = s - t",
        category: Category::Arithmetic,
        encoding: Encoding::R {
            opcode: "000000",
            rs: "sssss",
            rt: "ttttt",
            rd: "ddddd",
            shamt: "-----",
            funct: "100010",
        },
        notes: None,
        tags: &["sub", "subtraction", "minus"],
    },
    Instruction {
        id: "subu",
        mnemonic: "subu",
        name: "Subtract Unsigned",
        description: "Subtract one register from another register without overflow",
        usage: "subu $d, $s, $t",
        result: "d = s - t",
        category: Category::Arithmetic,
        encoding: Encoding::R {
            opcode: "000000",
            rs: "sssss",
            rt: "ttttt",
            rd: "ddddd",
            shamt: "-----",
            funct: "100011",
        },
        notes: None,
        tags: &["sub", "subtraction", "minus"],
    },
    Instruction {
        id: "subi",
        mnemonic: "sub",
        name: "Subtract Immediate",
        description: "Subtract an immediate from a register",
        usage: "sub $t, $s, imm",
        result: "t = s - imm",
        category: Category::Arithmetic,
        encoding: Encoding::Pseudo {
            expansion: &[
                "addi $t, $s, -imm    # imm > -2^15",
                "",
                "ori $at, $0, imm     # imm == -2^15",
                "sub $t, $s, $at",
            ],
        },
        notes: Some("MIPS does not provide a subtract immediate instruction because the immediate value can simply be negated by the assembler, and addi used instead. If the value is -2^15 (which cannot be nagated in 16 bit 2's complement), two equivalent instructions are needed. This instruction may also be available as subi in environments other than QtSpim."),
        tags: &["sub", "subtraction", "minus"],
    },
    Instruction {
        id: "subiu",
        mnemonic: "subu",
        name: "Subtract Immediate Unsigned",
        description: "Subtract an immediate from a register without overflow",
        usage: "subu $t, $s, imm",
        result: "t = s - imm",
        category: Category::Arithmetic,
        encoding: Encoding::Pseudo {
            expansion: &[
                "addiu $t, $s, -imm    # imm > -2^15",
                "",
                "ori $at, $0, imm      # imm == -2^15",
                "subu $t, $s, $at",
            ],
        },
        notes: Some("MIPS does not provide a subtract immediate unsigned instruction because the immediate value can simply be negated by the assembler, and addiu used instead. If the value is -2^15 (which cannot be nagated in 16 bit 2's complement), two equivalent instructions are needed. This instruction may also be available as subiu in environments other than QtSpim."),
        tags: &["sub", "subtraction", "minus"],
    },
    Instruction {
        id: "mult",
        mnemonic: "mult",
        name: "Multiply",
        description: "Multiply two integers",
        usage: "mult $s, $t",
        result: "[HI, LO] = s * t",
        category: Category::Arithmetic,
        encoding: Encoding::R {
            opcode: "000000",
            rs: "sssss",
            rt: "ttttt",
            rd: "-----",
            shamt: "-----",
            funct: "011000",
        },
        notes: None,
        tags: &["multiply", "multiplication", "times"],
    },
    Instruction {
        id: "multu",
        mnemonic: "multu",
        name: "Multiply Unsigned",
        description: "Multiply two integers (unsigned)",
        usage: "multu $s, $t",
        result: "[HI, LO] = s * t",
        category: Category::Arithmetic,
        encoding: Encoding::R {
            opcode: "000000",
            rs: "sssss",
            rt: "ttttt",
            rd: "-----",
            shamt: "-----",
            funct: "011001",
        },
        notes: None,
        tags: &["multiply", "multiplication", "times"],
    },
    Instruction {
        id: "mul",
        mnemonic: "mul",
        name: "Multiply and return lower 32 bits",
        description: "Multiply two integers, keeping only the lower 32 bits",
        usage: "mul $d, $s, $t",
        result: "d = s * t (lower 32 bits only)",
        category: Category::Arithmetic,
        encoding: Encoding::Pseudo {
            expansion: &[
                "mult $s, $t",
                "mflo $d",
            ],
        },
        notes: None,
        tags: &["multiply", "multiplication", "times"],
    },
    Instruction {
        id: "div",
        mnemonic: "div",
        name: "Divide",
        description: "Divide two integers",
        usage: "div $s, $t",
        result: "LO = s / t; HI = s % t",
        category: Category::Arithmetic,
        encoding: Encoding::R {
            opcode: "000000",
            rs: "sssss",
            rt: "ttttt",
            rd: "-----",
            shamt: "-----",
            funct: "011010",
        },
        notes: None,
        tags: &["divide", "division", "modulo", "modulus"],
    },
    Instruction {
        id: "divu",
        mnemonic: "divu",
        name: "Divide Unsigned",
        description: "Divide two integers (unsigned)",
        usage: "divu $s, $t",
        result: "LO = s / t; HI = s % t",
        category: Category::Arithmetic,
        encoding: Encoding::R {
            opcode: "000000",
            rs: "sssss",
            rt: "-----",
            rd: "-----",
            shamt: "00000",
            funct: "011011",
        },
        notes: None,
        tags: &["divide", "division"],
    },
    Instruction {
        id: "quotient",
        mnemonic: "div",
        name: "Divide and return the quotient",
        description: "Divide two integers, returning only the quotient",
        usage: "div $d, $s, $t",
        result: "d = s / t (whole part only)",
        category: Category::Arithmetic,
        encoding: Encoding::Pseudo {
            expansion: &[
                "div $s, $t",
                "mflo $d",
            ],
        },
        notes: None,
        tags: &["divide", "division"],
    },
    Instruction {
        id: "rem",
        mnemonic: "rem",
        name: "Divide and return the remainder",
        description: "Divide two integers, returning only the remainder",
        usage: "rem $d, $s, $t",
        result: "d = s % t",
        category: Category::Arithmetic,
        encoding: Encoding::Pseudo {
            expansion: &[
                "div $s, $t",
                "mfhi $d",
            ],
        },
        notes: None,
        tags: &["divide", "division", "modulo", "modulus"],
    },
    Instruction {
        id: "mfhi",
        mnemonic: "mfhi",
        name: "Move from HI",
        description: "Move the value in HI to another register",
        usage: "mfhi $d",
        result: "d = HI",
        category: Category::Arithmetic,
        encoding: Encoding::R {
            opcode: "000000",
            rs: "-----",
            rt: "-----",
            rd: "ddddd",
            shamt: "-----",
            funct: "010000",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "mthi",
        mnemonic: "mthi",
        name: "Move to HI",
        description: "Move the value in a register to HI",
        usage: "mthi $s",
        result: "HI = s",
        category: Category::Arithmetic,
        encoding: Encoding::R {
            opcode: "000000",
            rs: "sssss",
            rt: "-----",
            rd: "-----",
            shamt: "-----",
            funct: "010001",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "mflo",
        mnemonic: "mflo",
        name: "Move from LO",
        description: "Move the value in LO to a register",
        usage: "mflo $d",
        result: "d = LO",
        category: Category::Arithmetic,
        encoding: Encoding::R {
            opcode: "000000",
            rs: "-----",
            rt: "-----",
            rd: "ddddd",
            shamt: "-----",
            funct: "010010",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "mtlo",
        mnemonic: "mtlo",
        name: "Move to LO",
        description: "Move the value in a register to LO",
        usage: "mtlo $s",
        result: "LO = s",
        category: Category::Arithmetic,
        encoding: Encoding::R {
            opcode: "000000",
            rs: "sssss",
            rt: "-----",
            rd: "-----",
            shamt: "-----",
            funct: "010011",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "abs",
        mnemonic: "abs",
        name: "Absolute Value",
        description: "Find the absolute value of an integer",
        usage: "abs $s, $t",
        result: "s = |t|",
        category: Category::Arithmetic,
        encoding: Encoding::Pseudo {
            expansion: &[
                "addu $s, $0, $t",
                "bgez $t, 8",
                "sub $s, $0, $t",
            ],
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "neg",
        mnemonic: "neg",
        name: "Negate",
        description: "Find the negation of an integer",
        usage: "neg $s, $t",
        result: "s = -t",
        category: Category::Arithmetic,
        encoding: Encoding::Pseudo {
            expansion: &[
                "sub $s, $0, $t",
            ],
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "b",
        mnemonic: "b",
        name: "Branch Unconditionally",
        description: "Branch with no condition",
        usage: "b label",
        result: "PC = label;",
        category: Category::Branch,
        encoding: Encoding::Pseudo {
            expansion: &[
                "beq $0, $0, label",
            ],
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "bal",
        mnemonic: "bal",
        name: "Branch Unconditionally and Link",
        description: "Branch with no condition and link",
        usage: "bal label",
        result: "RA = PC + 4; PC = label;",
        category: Category::Branch,
        encoding: Encoding::Pseudo {
            expansion: &[
                "bgezal $0, label",
            ],
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "beq",
        mnemonic: "beq",
        name: "Branch on Equal",
        description: "Branch if two registers have the same value",
        usage: "beq $s, $t, label",
        result: "if (s == t) PC = label;",
        category: Category::Branch,
        encoding: Encoding::I {
            opcode: "000100",
            rs: "sssss",
            rt: "ttttt",
            imm: "iiiiiiiiiiiiiiii",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "beqi",
        mnemonic: "beq",
        name: "Branch on Equal to Immediate",
        description: "Branch if a register is equal to an immediate",
        usage: "beq $t, imm, label",
        result: "if (t == imm) PC = label;",
        category: Category::Branch,
        encoding: Encoding::Pseudo {
            expansion: &[
                "ori $at, $0, imm",
                "beq $t, $at, label",
            ],
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "beqz",
        mnemonic: "beqz",
        name: "Branch on Equal to Zero",
        description: "Branch if a register is equal to zero",
        usage: "beqz $s, label",
        result: "if (s == 0) PC = label;",
        category: Category::Branch,
        encoding: Encoding::Pseudo {
            expansion: &[
                "beq $s, $0, C",
            ],
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "bne",
        mnemonic: "bne",
        name: "Branch on not Equal",
        description: "Branch if two registers do not have the same value",
        usage: "bne $s, $t, label",
        result: "if (s != t) PC = label;",
        category: Category::Branch,
        encoding: Encoding::I {
            opcode: "000101",
            rs: "sssss",
            rt: "ttttt",
            imm: "iiiiiiiiiiiiiiii",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "bnei",
        mnemonic: "bne",
        name: "Branch on not Equal to Immediate",
        description: "Branch if a register is not equal to an immediate",
        usage: "bne $t, imm, label",
        result: "if (t != imm) PC = label;",
        category: Category::Branch,
        encoding: Encoding::Pseudo {
            expansion: &[
                "ori $at, $0, imm",
                "bne $t, $at, label",
            ],
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "bnez",
        mnemonic: "bnez",
        name: "Branch on not equal to Zero",
        description: "Branch if a register is not equal to zero",
        usage: "bnez $s, label",
        result: "if (s != 0) PC = label;",
        category: Category::Branch,
        encoding: Encoding::Pseudo {
            expansion: &[
                "bne $s, $0, C",
            ],
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "blt",
        mnemonic: "blt",
        name: "Branch Less Than",
        description: "Branch if a register is less than another register",
        usage: "blt $s, $t, label",
        result: "if (s < t) PC = label;",
        category: Category::Branch,
        encoding: Encoding::Pseudo {
            expansion: &[
                "slt $at, $s, $t",
                "bne $at, $0, label",
            ],
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "bltz",
        mnemonic: "bltz",
        name: "Branch on Less than Zero",
        description: "Branch if a register is less than zero",
        usage: "bltz $s, label",
        result: "if (s < 0) PC = label;",
        category: Category::Branch,
        encoding: Encoding::Ri {
            opcode: "000001",
            rs: "sssss",
            regimm: "00000",
            imm: "iiiiiiiiiiiiiiii",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "bltzal",
        mnemonic: "bltzal",
        name: "Branch on Less than Zero and Link",
        description: "Branch if a register is less zero and link",
        usage: "bltzal $s, label",
        result: "if (s < 0) {RA = PC + 4; PC = label;}",
        category: Category::Branch,
        encoding: Encoding::Ri {
            opcode: "000001",
            rs: "sssss",
            regimm: "10000",
            imm: "iiiiiiiiiiiiiiii",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "ble",
        mnemonic: "ble",
        name: "Branch Less Than or Equal",
        description: "Branch if a register is less than or equal to another register",
        usage: "ble $s, $t, label",
        result: "if (s <= t) PC = label;",
        category: Category::Branch,
        encoding: Encoding::Pseudo {
            expansion: &[
                "slt $at, $t, $s",
                "beq $at, $0, label",
            ],
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "blez",
        mnemonic: "blez",
        name: "Branch on Less than or Equal to Zero",
        description: "Branch if a register is less than or equal to zero",
        usage: "blez $s, label",
        result: "if (s <= 0) PC = label;",
        category: Category::Branch,
        encoding: Encoding::I {
            opcode: "000110",
            rs: "sssss",
            rt: "-----",
            imm: "iiiiiiiiiiiiiiii",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "bgt",
        mnemonic: "bgt",
        name: "Branch Greater Than",
        description: "Branch if a register is greater than another register",
        usage: "bgt $s, $t, label",
        result: "if (s > t) PC = label;",
        category: Category::Branch,
        encoding: Encoding::Pseudo {
            expansion: &[
                "slt $at, $t, $s",
                "bne $at, $0, label",
            ],
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "bgtz",
        mnemonic: "bgtz",
        name: "Branch on Greater than Zero",
        description: "Branch if a register is greater than zero",
        usage: "bgtz $s, label",
        result: "if (s > 0) PC = label;",
        category: Category::Branch,
        encoding: Encoding::I {
            opcode: "000111",
            rs: "sssss",
            rt: "-----",
            imm: "iiiiiiiiiiiiiiii",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "bgezal",
        mnemonic: "bgezal",
        name: "Branch on Greater than or Equal to Zero and Link",
        description: "Branch if a register is greater than or equal to zero and link",
        usage: "bgezal $s, label",
        result: "if (s >= 0) {RA = PC + 4; PC = label;}",
        category: Category::Branch,
        encoding: Encoding::Ri {
            opcode: "000001",
            rs: "sssss",
            regimm: "10001",
            imm: "iiiiiiiiiiiiiiii",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "bge",
        mnemonic: "bge",
        name: "Branch Greater Than or Equal",
        description: "Branch if a register is greater than or equal to another register",
        usage: "bge $s, $t, label",
        result: "if (s >= t) PC = label;",
        category: Category::Branch,
        encoding: Encoding::Pseudo {
            expansion: &[
                "slt $at, $s, $t",
                "beq $at, $0, label",
            ],
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "bgez",
        mnemonic: "bgez",
        name: "Branch on Greater than or Equal to Zero",
        description: "Branch if a register is  greater than or equal to zero",
        usage: "bgez $s, label",
        result: "if (s >= 0) PC = label;",
        category: Category::Branch,
        encoding: Encoding::Ri {
            opcode: "000001",
            rs: "sssss",
            regimm: "00001",
            imm: "iiiiiiiiiiiiiiii",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "and",
        mnemonic: "and",
        name: "Bitwise And",
        description: "Bitwise and two registers",
        usage: "and $d, $s, $t",
        result: "d = s & t",
        category: Category::Logical,
        encoding: Encoding::R {
            opcode: "000000",
            rs: "sssss",
            rt: "ttttt",
            rd: "ddddd",
            shamt: "00000",
            funct: "100100",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "andi",
        mnemonic: "andi",
        name: "Bitwise And Immediate",
        description: "Bitwise and a register and an immediate",
        usage: "andi $t, $s, imm",
        result: "t = s & imm",
        category: Category::Logical,
        encoding: Encoding::I {
            opcode: "001100",
            rs: "sssss",
            rt: "ttttt",
            imm: "iiiiiiiiiiiiiiii",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "or",
        mnemonic: "or",
        name: "Bitwise Or",
        description: "Bitwise or two registers",
        usage: "or $d, $s, $t",
        result: "d = s | t",
        category: Category::Logical,
        encoding: Encoding::R {
            opcode: "000000",
            rs: "sssss",
            rt: "ttttt",
            rd: "ddddd",
            shamt: "00000",
            funct: "100101",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "ori",
        mnemonic: "ori",
        name: "Bitwise Or Immediate",
        description: "Bitwise or a register and an immediate",
        usage: "ori $t, $s, imm",
        result: "t = s | imm",
        category: Category::Logical,
        encoding: Encoding::I {
            opcode: "001101",
            rs: "sssss",
            rt: "ttttt",
            imm: "iiiiiiiiiiiiiiii",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "xor",
        mnemonic: "xor",
        name: "Bitwise Exclusive Or",
        description: "Bitwise exclusive or two registers",
        usage: "xor $d, $s, $t",
        result: "d = s ^ t",
        category: Category::Logical,
        encoding: Encoding::R {
            opcode: "000000",
            rs: "sssss",
            rt: "ttttt",
            rd: "ddddd",
            shamt: "00000",
            funct: "100110",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "nor",
        mnemonic: "nor",
        name: "Bitwise Nor",
        description: "Bitwise nor two registers",
        usage: "nor $d, $s, $t",
        result: "d = ~(s | t)",
        category: Category::Logical,
        encoding: Encoding::R {
            opcode: "000000",
            rs: "sssss",
            rt: "ttttt",
            rd: "ddddd",
            shamt: "00000",
            funct: "100111",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "not",
        mnemonic: "not",
        name: "Bitwise Not",
        description: "Bitwise not a register",
        usage: "not $s, $t",
        result: "s = ~(t)",
        category: Category::Logical,
        encoding: Encoding::Pseudo {
            expansion: &[
                "nor $s, $t, $0",
            ],
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "xori",
        mnemonic: "xori",
        name: "Bitwise Exclusive Or Immediate",
        description: "Bitwise exclusive or a register and an immediate",
        usage: "xori $t, $s, imm",
        result: "t = s ^ imm",
        category: Category::Logical,
        encoding: Encoding::I {
            opcode: "001110",
            rs: "sssss",
            rt: "ttttt",
            imm: "iiiiiiiiiiiiiiii",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "j",
        mnemonic: "j",
        name: "Jump",
        description: "Jump to a specified label",
        usage: "j label",
        result: "PC = label;",
        category: Category::Jump,
        encoding: Encoding::J {
            opcode: "000010",
            addr: "aaaaaaaaaaaaaaaaaaaaaaaaaa",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "jal",
        mnemonic: "jal",
        name: "Jump and Link",
        description: "Jump to a specified label and link",
        usage: "jal label",
        result: "RA = PC + 4; PC = label;",
        category: Category::Jump,
        encoding: Encoding::J {
            opcode: "000011",
            addr: "aaaaaaaaaaaaaaaaaaaaaaaaaa",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "jr",
        mnemonic: "jr",
        name: "Jump Register",
        description: "Jump to the address in a register",
        usage: "jr $s",
        result: "PC = s;",
        category: Category::Jump,
        encoding: Encoding::R {
            opcode: "000000",
            rs: "sssss",
            rt: "-----",
            rd: "-----",
            shamt: "-----",
            funct: "001000",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "jalr",
        mnemonic: "jalr",
        name: "Jump Register and Link",
        description: "Jump to the address in a register and link",
        usage: "jalr $s, $d",
        result: "d = PC + 4; PC = s;",
        category: Category::Jump,
        encoding: Encoding::R {
            opcode: "000000",
            rs: "sssss",
            rt: "-----",
            rd: "ddddd",
            shamt: "-----",
            funct: "001001",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "lb",
        mnemonic: "lb",
        name: "Load Byte",
        description: "Load a (sign-extended) byte from memory to a register",
        usage: "lb $t, imm($s)",
        result: "t = memory[s + imm]",
        category: Category::Memory,
        encoding: Encoding::I {
            opcode: "100000",
            rs: "sssss",
            rt: "ttttt",
            imm: "iiiiiiiiiiiiiiii",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "lbu",
        mnemonic: "lbu",
        name: "Load Byte Unsigned",
        description: "Load a (zero-padded) byte from memory to a register",
        usage: "lbu $t, imm($s)",
        result: "t = memory[s + imm]",
        category: Category::Memory,
        encoding: Encoding::I {
            opcode: "100100",
            rs: "sssss",
            rt: "ttttt",
            imm: "iiiiiiiiiiiiiiii",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "lh",
        mnemonic: "lh",
        name: "Load Half Word",
        description: "Load a (sign-extended) half word from memory to a register",
        usage: "lh $t, imm($s)",
        result: "t = memory[s + imm]",
        category: Category::Memory,
        encoding: Encoding::I {
            opcode: "100001",
            rs: "sssss",
            rt: "ttttt",
            imm: "iiiiiiiiiiiiiiii",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "lhu",
        mnemonic: "lhu",
        name: "Load Half Word Unsigned",
        description: "Load a (zero-padded) half word from memory to a register",
        usage: "lhu $t, imm($s)",
        result: "t = memory[s + imm]",
        category: Category::Memory,
        encoding: Encoding::I {
            opcode: "100101",
            rs: "sssss",
            rt: "ttttt",
            imm: "iiiiiiiiiiiiiiii",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "lw",
        mnemonic: "lw",
        name: "Load Word",
        description: "Load a word from memory to a register",
        usage: "lw $t, imm($s)",
        result: "t = memory[s + imm]",
        category: Category::Memory,
        encoding: Encoding::I {
            opcode: "100011",
            rs: "sssss",
            rt: "ttttt",
            imm: "iiiiiiiiiiiiiiii",
        },
        notes: Some("Getting an unaligned address error with load word? The address must be aligned with a word boundary (i.e. it must be a multiple of 4). Double check the math you used to calculate the address, and check if you need to add a .align directive in your .data section."),
        tags: &[],
    },
    Instruction {
        id: "lw-label",
        mnemonic: "lw",
        name: "Load Word Label",
        description: "Load a word from memory to a register by label",
        usage: "lw $t, label",
        result: "t = memory[label]",
        category: Category::Memory,
        encoding: Encoding::Pseudo {
            expansion: &[
                "lui $at, label[31-16]",
                "ori $at, $at, label[15-0]",
                "lw $t, 0($at)",
            ],
        },
        notes: Some("Getting an unaligned address error with load word? The address must be aligned with a word boundary (i.e. it must be a multiple of 4). Check if you need to add a .align directive in your .data section."),
        tags: &[],
    },
    Instruction {
        id: "sb",
        mnemonic: "sb",
        name: "Store Byte",
        description: "Store a byte from a register to memory",
        usage: "sb $t, imm($s)",
        result: "memory[s + imm] = t",
        category: Category::Memory,
        encoding: Encoding::I {
            opcode: "101000",
            rs: "sssss",
            rt: "ttttt",
            imm: "iiiiiiiiiiiiiiii",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "sh",
        mnemonic: "sh",
        name: "Store Half Word",
        description: "Store a half word from a register to memory",
        usage: "sh $t, imm($s)",
        result: "memory[s + imm] = t",
        category: Category::Memory,
        encoding: Encoding::I {
            opcode: "101000",
            rs: "sssss",
            rt: "ttttt",
            imm: "iiiiiiiiiiiiiiii",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "sw",
        mnemonic: "sw",
        name: "Store Word",
        description: "Store a word from a register to memory",
        usage: "sw $t, imm($s)",
        result: "memory[s + imm] = t",
        category: Category::Memory,
        encoding: Encoding::I {
            opcode: "101011",
            rs: "sssss",
            rt: "ttttt",
            imm: "iiiiiiiiiiiiiiii",
        },
        notes: Some("Getting an unaligned address error with store word? The address must be aligned with a word boundary (i.e. it must be a multiple of 4). Double check the math you used to calculate the address, and check if you need to add a .align directive in your .data section."),
        tags: &[],
    },
    Instruction {
        id: "sw-label",
        mnemonic: "sw",
        name: "Store Word Label",
        description: "Store a word from a register to memory by label",
        usage: "sw $t, label",
        result: "memory[label] = t",
        category: Category::Memory,
        encoding: Encoding::Pseudo {
            expansion: &[
                "lui $at, label[31-16]",
                "ori $at, $at, label[15-0]",
                "sw $t, 0($at)",
            ],
        },
        notes: Some("Getting an unaligned address error with store word? The address must be aligned with a word boundary (i.e. it must be a multiple of 4). Check if you need to add a .align directive in your .data section."),
        tags: &[],
    },
    Instruction {
        id: "seq",
        mnemonic: "seq",
        name: "Set on Equal",
        description: "Check is a register is equal to than another register",
        usage: "seq $d, $s, $t",
        result: "d = s == t",
        category: Category::Comparison,
        encoding: Encoding::Pseudo {
            expansion: &[
                "beq $s, $t, 12",
                "ori $d, $0, 0",
                "beq $0, $0, 8",
                "ori $d, $0, 1",
            ],
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "sne",
        mnemonic: "sne",
        name: "Set on Not Equal",
        description: "Check is a register is not equal to than another register",
        usage: "sne $d, $s, $t",
        result: "d = s != t",
        category: Category::Comparison,
        encoding: Encoding::Pseudo {
            expansion: &[
                "beq $s, $t, 12",
                "ori $d, $0, 1",
                "beq $0, $0, 8",
                "ori $d, $0, 0",
            ],
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "slt",
        mnemonic: "slt",
        name: "Set on Less Than",
        description: "Check is a register is less than another register",
        usage: "slt $d, $s, $t",
        result: "d = s < t",
        category: Category::Comparison,
        encoding: Encoding::R {
            opcode: "000000",
            rs: "sssss",
            rt: "ttttt",
            rd: "ddddd",
            shamt: "-----",
            funct: "101010",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "sltu",
        mnemonic: "sltu",
        name: "Set on Less Than Unsigned",
        description: "Check is a register is less than another register (unsigned)",
        usage: "sltu $d, $s, $t",
        result: "d = s < t",
        category: Category::Comparison,
        encoding: Encoding::R {
            opcode: "000000",
            rs: "sssss",
            rt: "ttttt",
            rd: "ddddd",
            shamt: "-----",
            funct: "101011",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "slti",
        mnemonic: "slti",
        name: "Set on Less Than Immediate",
        description: "Check is a register is less than an immediate",
        usage: "slti $s, $t, imm",
        result: "s = t < imm",
        category: Category::Comparison,
        encoding: Encoding::I {
            opcode: "001010",
            rs: "sssss",
            rt: "ttttt",
            imm: "iiiiiiiiiiiiiiii",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "sltiu",
        mnemonic: "sltiu",
        name: "Set on Less Than Immediate Unsigned",
        description: "Check is a register is less than an immediate (unsigned)",
        usage: "sltiu $s, $t, imm",
        result: "s = t < imm",
        category: Category::Comparison,
        encoding: Encoding::I {
            opcode: "001011",
            rs: "sssss",
            rt: "ttttt",
            imm: "iiiiiiiiiiiiiiii",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "sle",
        mnemonic: "sle",
        name: "Set on Less Than or Equal",
        description: "Check is a register is less than or equal to than another register",
        usage: "sle $d, $s, $t",
        result: "d = s <= t",
        category: Category::Comparison,
        encoding: Encoding::Pseudo {
            expansion: &[
                "bne $s, $t, 12",
                "ori $d, $0, 1",
                "beq $0, $0, 8",
                "slt $d, $s, $t",
            ],
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "sleu",
        mnemonic: "sleu",
        name: "Set on Less Than or Equal Unsigned",
        description: "Check is a register is less than or equal to than another register (unsigned)",
        usage: "sleu $d, $s, $t",
        result: "d = s <= t",
        category: Category::Comparison,
        encoding: Encoding::Pseudo {
            expansion: &[
                "bne $s, $t, 12",
                "ori $d, $0, 1",
                "beq $0, $0, 8",
                "sltu $d, $s, $t",
            ],
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "sgt",
        mnemonic: "sgt",
        name: "Set on Greater Than",
        description: "Check is a register is greater than another register",
        usage: "sgt $d, $s, $t",
        result: "d = s > t",
        category: Category::Comparison,
        encoding: Encoding::Pseudo {
            expansion: &[
                "slt $d, $t, $s",
            ],
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "sgtu",
        mnemonic: "sgtu",
        name: "Set on Greater Than Unsigned",
        description: "Check is a register is greater than another register (unsigned)",
        usage: "sgtu $d, $s, $t",
        result: "d = s > t",
        category: Category::Comparison,
        encoding: Encoding::Pseudo {
            expansion: &[
                "sltu $d, $t, $s",
            ],
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "sge",
        mnemonic: "sge",
        name: "Set on Greater Than or Equal",
        description: "Check is a register is greater than or equal to than another register",
        usage: "sge $d, $s, $t",
        result: "d = s >= t",
        category: Category::Comparison,
        encoding: Encoding::Pseudo {
            expansion: &[
                "bne $s, $t, 12",
                "ori $d, $0, 1",
                "beq $0, $0, 8",
                "slt $d, $t, $s",
            ],
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "sgeu",
        mnemonic: "sgeu",
        name: "Set on Greater Than or Equal Unsigned",
        description: "Check is a register is greater than or equal to than another register (unsigned)",
        usage: "sgeu $d, $s, $t",
        result: "d = s >= t",
        category: Category::Comparison,
        encoding: Encoding::Pseudo {
            expansion: &[
                "bne $s, $t, 12",
                "ori $d, $0, 1",
                "beq $0, $0, 8",
                "sltu $d, $t, $s",
            ],
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "sllv",
        mnemonic: "sllv",
        name: "Shift Left Logical",
        description: "Shift the contents of a register left by an amount from a register",
        usage: "sllv $d, $t, $s",
        result: "d = t << s",
        category: Category::Shift,
        encoding: Encoding::R {
            opcode: "000000",
            rs: "sssss",
            rt: "ttttt",
            rd: "ddddd",
            shamt: "-----",
            funct: "000100",
        },
        notes: Some("Only the least significant 5 bits of $s are used."),
        tags: &[],
    },
    Instruction {
        id: "sll",
        mnemonic: "sll",
        name: "Shift Left Logical Immediate",
        description: "Shift the contents of a register left by an immediate amount",
        usage: "sll $d, $t, imm",
        result: "d = t << imm",
        category: Category::Shift,
        encoding: Encoding::R {
            opcode: "000000",
            rs: "-----",
            rt: "ttttt",
            rd: "ddddd",
            shamt: "iiiii",
            funct: "000000",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "srlv",
        mnemonic: "srlv",
        name: "Shift Right Logical",
        description: "Shift the contents of a register right by an amount from a register (zero-padded)",
        usage: "srlv $d, $t, $s",
        result: "d = t >> s",
        category: Category::Shift,
        encoding: Encoding::R {
            opcode: "000000",
            rs: "sssss",
            rt: "ttttt",
            rd: "ddddd",
            shamt: "-----",
            funct: "000110",
        },
        notes: Some("Only the least significant 5 bits of $s are used."),
        tags: &[],
    },
    Instruction {
        id: "srl",
        mnemonic: "srl",
        name: "Shift Right Logical Immediate",
        description: "Shift the contents of a register right by an immediate amount (zero-padded)",
        usage: "srl $d, $t, imm",
        result: "d = t >> imm",
        category: Category::Shift,
        encoding: Encoding::R {
            opcode: "000000",
            rs: "-----",
            rt: "ttttt",
            rd: "ddddd",
            shamt: "iiiii",
            funct: "000010",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "srav",
        mnemonic: "srav",
        name: "Shift Right Arithmetic",
        description: "Shift the contents of a register right by an amount from a register (sign-extended)",
        usage: "srav $d, $t, $s",
        result: "d = t >> s",
        category: Category::Shift,
        encoding: Encoding::R {
            opcode: "000000",
            rs: "sssss",
            rt: "ttttt",
            rd: "ddddd",
            shamt: "-----",
            funct: "000111",
        },
        notes: Some("Only the least significant 5 bits of $s are used."),
        tags: &[],
    },
    Instruction {
        id: "sra",
        mnemonic: "sra",
        name: "Shift Right Arithmetic Immediate",
        description: "Shift the contents of a register right by the specified number of places (sign-extended)",
        usage: "sra $d, $t, imm",
        result: "d = t >> imm",
        category: Category::Shift,
        encoding: Encoding::R {
            opcode: "000000",
            rs: "-----",
            rt: "ttttt",
            rd: "ddddd",
            shamt: "iiiii",
            funct: "000011",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "rol",
        mnemonic: "rol",
        name: "Rotate Left",
        description: "Rotate the contents of a register left by an amount from a register",
        usage: "rol $d, $t, $s",
        result: "d = rotateLeft(t, s)",
        category: Category::Shift,
        encoding: Encoding::Pseudo {
            expansion: &[
                "subu $at, $0, $s",
                "srlv $at, $t, $at",
                "sllv $d, $s, $t",
                "or $d, $d, $at",
            ],
        },
        notes: Some("Only the least significant 5 bits of $s are used."),
        tags: &["circular", "shift"],
    },
    Instruction {
        id: "ror",
        mnemonic: "ror",
        name: "Rotate Right",
        description: "Rotate the contents of a register right by an amount from a register",
        usage: "rol $d, $t, $s",
        result: "d = rotateRight(t, s)",
        category: Category::Shift,
        encoding: Encoding::Pseudo {
            expansion: &[
                "subu $at, $0, $s",
                "sllv $at, $t, $at",
                "srlv $d, $s, $t",
                "or $d, $d, $at",
            ],
        },
        notes: Some("Only the least significant 5 bits of $s are used."),
        tags: &["circular", "shift"],
    },
    Instruction {
        id: "roli",
        mnemonic: "rol",
        name: "Rotate Left Immediate",
        description: "Rotate the contents of a register left by the specified number of places",
        usage: "rol $d, $t, imm",
        result: "d = rotateLeft(t, imm)",
        category: Category::Shift,
        encoding: Encoding::Pseudo {
            expansion: &[
                "srl $at, $t, (32 - imm)",
                "sll $d, $t, imm",
                "or $d, $d, $at",
            ],
        },
        notes: None,
        tags: &["circular", "shift"],
    },
    Instruction {
        id: "rori",
        mnemonic: "ror",
        name: "Rotate Right Immediate",
        description: "Rotate the contents of a register right by the specified number of places",
        usage: "rol $d, $t, imm",
        result: "d = rotateRight(t, imm)",
        category: Category::Shift,
        encoding: Encoding::Pseudo {
            expansion: &[
                "sll $at, $t, (32 - imm)",
                "srl $d, $t, imm",
                "or $d, $d, $at",
            ],
        },
        notes: None,
        tags: &["circular", "shift"],
    },
    Instruction {
        id: "mtc1",
        mnemonic: "mtc1",
        name: "Move to Coprocessor 1",
        description: "Move a value from a general-purpose register to a floating point register",
        usage: "mtc1 $t, $d",
        result: "d = t",
        category: Category::FloatMoveAndConvert,
        encoding: Encoding::Cop {
            opcode: "010001",
            funct: "00100",
            rt: "ttttt",
            rd: "ddddd",
            addr: "-----------",
        },
        notes: Some("The first argument is the register from the main processor, the second is the register from the coprocessor. Unlike most MIPS instructions, the destination of the operation is not listed first."),
        tags: &[],
    },
    Instruction {
        id: "mfc1",
        mnemonic: "mfc1",
        name: "Move from Coprocessor 1",
        description: "Move a value from a floating point register to a general-purpose register",
        usage: "mtc1 $t, $d",
        result: "t = d",
        category: Category::FloatMoveAndConvert,
        encoding: Encoding::Cop {
            opcode: "010001",
            funct: "00000",
            rt: "ttttt",
            rd: "ddddd",
            addr: "-----------",
        },
        notes: Some("The first argument is the register from the main processor, the second is the register from the coprocessor."),
        tags: &[],
    },
    Instruction {
        id: "mov-s",
        mnemonic: "mov.s",
        name: "Floating Point Move Single",
        description: "Move a single-precision float to another register",
        usage: "mov.s $d, $s",
        result: "d = s",
        category: Category::FloatMoveAndConvert,
        encoding: Encoding::F {
            opcode: "010001",
            format: "00000",
            ft: "-----",
            fs: "sssss",
            fd: "ddddd",
            funct: "000110",
        },
        notes: None,
        tags: &["copy"],
    },
    Instruction {
        id: "mov-d",
        mnemonic: "mov.d",
        name: "Floating Point Move Double",
        description: "Move a double-precision float to another register",
        usage: "mov.d $d, $s",
        result: "d = s",
        category: Category::FloatMoveAndConvert,
        encoding: Encoding::F {
            opcode: "010001",
            format: "00001",
            ft: "-----",
            fs: "sssss",
            fd: "ddddd",
            funct: "000110",
        },
        notes: None,
        tags: &["copy"],
    },
    Instruction {
        id: "movz-s",
        mnemonic: "movz.s",
        name: "Floating Point Move on Zero Single",
        description: "Move a single-precision float if another register is zero",
        usage: "movz.s $d, $s, $t",
        result: "if (t == 0) d = s;",
        category: Category::FloatMoveAndConvert,
        encoding: Encoding::F {
            opcode: "010001",
            format: "10000",
            ft: "ttttt",
            fs: "sssss",
            fd: "ddddd",
            funct: "010010",
        },
        notes: None,
        tags: &["copy"],
    },
    Instruction {
        id: "movz-d",
        mnemonic: "movz.d",
        name: "Floating Point Move on Zero Double",
        description: "Move a double-precision float if another register is zero",
        usage: "movz.d $d, $s, $t",
        result: "if (t == 0) d = s;",
        category: Category::FloatMoveAndConvert,
        encoding: Encoding::F {
            opcode: "010001",
            format: "10001",
            ft: "ttttt",
            fs: "sssss",
            fd: "ddddd",
            funct: "010010",
        },
        notes: None,
        tags: &["copy"],
    },
    Instruction {
        id: "movn-s",
        mnemonic: "movn.s",
        name: "Floating Point Move on Not Zero Single",
        description: "Move a single-precision float if another register is not zero",
        usage: "movn.s $d, $s, $t",
        result: "if (t != 0) d = s;",
        category: Category::FloatMoveAndConvert,
        encoding: Encoding::F {
            opcode: "010001",
            format: "10000",
            ft: "ttttt",
            fs: "sssss",
            fd: "ddddd",
            funct: "010011",
        },
        notes: None,
        tags: &["copy"],
    },
    Instruction {
        id: "movn-d",
        mnemonic: "movn.d",
        name: "Floating Point Move on Not Zero Double",
        description: "Move a double-precision float if another register is not zero",
        usage: "movn.d $d, $s, $t",
        result: "if (t != 0) d = s;",
        category: Category::FloatMoveAndConvert,
        encoding: Encoding::F {
            opcode: "010001",
            format: "10001",
            ft: "ttttt",
            fs: "sssss",
            fd: "ddddd",
            funct: "010011",
        },
        notes: None,
        tags: &["copy"],
    },
    Instruction {
        id: "cvt-s-w",
        mnemonic: "cvt.s.w",
        name: "Convert Word to Single",
        description: "Convert an integer to a single-precision float",
        usage: "cvt.s.w $d, $s",
        result: "d = (float) s",
        category: Category::FloatMoveAndConvert,
        encoding: Encoding::F {
            opcode: "010001",
            format: "10100",
            ft: "-----",
            fs: "sssss",
            fd: "ddddd",
            funct: "100000",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "cvt-d-w",
        mnemonic: "cvt.d.w",
        name: "Convert Word to Double",
        description: "Convert an integer to a double-precision float",
        usage: "cvt.d.w $d, $s",
        result: "d = (double) s",
        category: Category::FloatMoveAndConvert,
        encoding: Encoding::F {
            opcode: "010001",
            format: "10001",
            ft: "-----",
            fs: "sssss",
            fd: "ddddd",
            funct: "100001",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "cvt-w-s",
        mnemonic: "cvt.w.s",
        name: "Convert Single to Word",
        description: "Convert a single-precision float to an integer",
        usage: "cvt.w.s $d, $s",
        result: "d = (int) s",
        category: Category::FloatMoveAndConvert,
        encoding: Encoding::F {
            opcode: "010001",
            format: "10000",
            ft: "-----",
            fs: "sssss",
            fd: "ddddd",
            funct: "100100",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "cvt-d-s",
        mnemonic: "cvt.d.s",
        name: "Convert Single to Double",
        description: "Convert a single-precision float to a double-precision float",
        usage: "cvt.d.s $d, $s",
        result: "d = (double) s",
        category: Category::FloatMoveAndConvert,
        encoding: Encoding::F {
            opcode: "010001",
            format: "10000",
            ft: "-----",
            fs: "sssss",
            fd: "ddddd",
            funct: "100001",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "cvt-w-d",
        mnemonic: "cvt.w.d",
        name: "Convert Double to Word",
        description: "Convert a double-precision float to an integer",
        usage: "cvt.w.d $d, $s",
        result: "d = (int) s",
        category: Category::FloatMoveAndConvert,
        encoding: Encoding::F {
            opcode: "010001",
            format: "10001",
            ft: "-----",
            fs: "sssss",
            fd: "ddddd",
            funct: "100100",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "cvt-s-d",
        mnemonic: "cvt.s.d",
        name: "Convert Double to Single",
        description: "Convert a double-precision float to a single-precision float",
        usage: "cvt.s.d $d, $s",
        result: "d = (float) s",
        category: Category::FloatMoveAndConvert,
        encoding: Encoding::F {
            opcode: "010001",
            format: "10001",
            ft: "-----",
            fs: "sssss",
            fd: "ddddd",
            funct: "100000",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "round-w-s",
        mnemonic: "round.w.s",
        name: "Floating Point Round to Word Single",
        description: "Round a single-precision float to an integer",
        usage: "round.w.s $d, $s",
        result: "d = round(s)",
        category: Category::FloatMoveAndConvert,
        encoding: Encoding::F {
            opcode: "010001",
            format: "00000",
            ft: "-----",
            fs: "sssss",
            fd: "ddddd",
            funct: "001100",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "round-w-d",
        mnemonic: "round.w.d",
        name: "Floating Point Round to Word Double",
        description: "Round a double-precision float to an integer",
        usage: "round.w.d $d, $s",
        result: "d = round(s)",
        category: Category::FloatMoveAndConvert,
        encoding: Encoding::F {
            opcode: "010001",
            format: "00001",
            ft: "-----",
            fs: "sssss",
            fd: "ddddd",
            funct: "001100",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "trunc-w-s",
        mnemonic: "trunc.w.s",
        name: "Floating Point Truncate to Word Single",
        description: "Truncate a single-precision float to an integer",
        usage: "trunc.w.s $d, $s",
        result: "d = trunc(s)",
        category: Category::FloatMoveAndConvert,
        encoding: Encoding::F {
            opcode: "010001",
            format: "00000",
            ft: "-----",
            fs: "sssss",
            fd: "ddddd",
            funct: "001101",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "trunc-w-d",
        mnemonic: "trunc.w.d",
        name: "Floating Point Truncate to Word Double",
        description: "Truncate a double-precision float to an integer",
        usage: "trunc.w.d $d, $s",
        result: "d = trunc(s)",
        category: Category::FloatMoveAndConvert,
        encoding: Encoding::F {
            opcode: "010001",
            format: "00001",
            ft: "-----",
            fs: "sssss",
            fd: "ddddd",
            funct: "001101",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "ceil-w-s",
        mnemonic: "ceil.w.s",
        name: "Floating Point Ceiling to Word Single",
        description: "Calculate the ceiling of a single-precision float as an integer",
        usage: "ceil.w.s $d, $s",
        result: "d = ⌈s⌉",
        category: Category::FloatMoveAndConvert,
        encoding: Encoding::F {
            opcode: "010001",
            format: "00000",
            ft: "-----",
            fs: "sssss",
            fd: "ddddd",
            funct: "001110",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "ceil-w-d",
        mnemonic: "ceil.w.d",
        name: "Floating Point Ceiling to Word Double",
        description: "Calculate the ceiling of a double-precision float as an integer",
        usage: "ceil.w.d $d, $s",
        result: "d = ⌈s⌉",
        category: Category::FloatMoveAndConvert,
        encoding: Encoding::F {
            opcode: "010001",
            format: "00001",
            ft: "-----",
            fs: "sssss",
            fd: "ddddd",
            funct: "001110",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "floor-w-s",
        mnemonic: "floor.w.s",
        name: "Floating Point Floor to Word Single",
        description: "Calculate the floor of a single-precision float as an integer",
        usage: "floor.w.s $d, $s",
        result: "d = ⌊s⌋",
        category: Category::FloatMoveAndConvert,
        encoding: Encoding::F {
            opcode: "010001",
            format: "00000",
            ft: "-----",
            fs: "sssss",
            fd: "ddddd",
            funct: "001111",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "floor-w-d",
        mnemonic: "floor.w.d",
        name: "Floating Point Floor to Word Double",
        description: "Calculate the floor of a double-precision float as an integer",
        usage: "floor.w.d $d, $s",
        result: "d = ⌊s⌋",
        category: Category::FloatMoveAndConvert,
        encoding: Encoding::F {
            opcode: "010001",
            format: "00001",
            ft: "-----",
            fs: "sssss",
            fd: "ddddd",
            funct: "001111",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "add-s",
        mnemonic: "add.s",
        name: "Floating Point Addition Single",
        description: "Calculate the sum of two single-precision floats",
        usage: "add.s $d, $s, $t",
        result: "d = s + t",
        category: Category::FloatArithmetic,
        encoding: Encoding::F {
            opcode: "010001",
            format: "10000",
            ft: "sssss",
            fs: "sssss",
            fd: "ddddd",
            funct: "000000",
        },
        notes: None,
        tags: &["add", "addition", "plus"],
    },
    Instruction {
        id: "add-d",
        mnemonic: "add.d",
        name: "Floating Point Addition Double",
        description: "Calculate the sum of two double-precision floats",
        usage: "add.d $d, $s, $t",
        result: "d = s + t",
        category: Category::FloatArithmetic,
        encoding: Encoding::F {
            opcode: "010001",
            format: "10001",
            ft: "sssss",
            fs: "sssss",
            fd: "ddddd",
            funct: "000000",
        },
        notes: None,
        tags: &["addition", "plus"],
    },
    Instruction {
        id: "sub-s",
        mnemonic: "sub.s",
        name: "Floating Point Subtraction Single",
        description: "Calculate the difference of two single-precision floats",
        usage: "sub.s $d, $s, $t",
        result: "d = s - t",
        category: Category::FloatArithmetic,
        encoding: Encoding::F {
            opcode: "010001",
            format: "10000",
            ft: "sssss",
            fs: "sssss",
            fd: "ddddd",
            funct: "000001",
        },
        notes: None,
        tags: &["subtraction", "minus"],
    },
    Instruction {
        id: "sub-d",
        mnemonic: "sub.d",
        name: "Floating Point Subtraction Double",
        description: "Calculate the difference of two double-precision floats",
        usage: "sub.d $d, $s, $t",
        result: "d = s - t",
        category: Category::FloatArithmetic,
        encoding: Encoding::F {
            opcode: "010001",
            format: "10001",
            ft: "sssss",
            fs: "sssss",
            fd: "ddddd",
            funct: "000001",
        },
        notes: None,
        tags: &["subtraction", "minus"],
    },
    Instruction {
        id: "mul-s",
        mnemonic: "mul.s",
        name: "Floating Point Multiplication Single",
        description: "Calculate the product of two single-precision floats",
        usage: "mul.s $d, $s, $t",
        result: "d = s * t",
        category: Category::FloatArithmetic,
        encoding: Encoding::F {
            opcode: "010001",
            format: "10000",
            ft: "sssss",
            fs: "sssss",
            fd: "ddddd",
            funct: "000010",
        },
        notes: None,
        tags: &["multiply", "multiplication", "times"],
    },
    Instruction {
        id: "mul-d",
        mnemonic: "mul.d",
        name: "Floating Point Multiplication Double",
        description: "Calculate the product of two double-precision floats",
        usage: "mul.d $d, $s, $t",
        result: "d = s * t",
        category: Category::FloatArithmetic,
        encoding: Encoding::F {
            opcode: "010001",
            format: "10001",
            ft: "sssss",
            fs: "sssss",
            fd: "ddddd",
            funct: "000010",
        },
        notes: None,
        tags: &["multiply", "multiplication", "times"],
    },
    Instruction {
        id: "div-s",
        mnemonic: "div.s",
        name: "Floating Point Division Single",
        description: "Calculate the quotient of two single-precision floats",
        usage: "div.s $d, $s, $t",
        result: "d = s / t",
        category: Category::FloatArithmetic,
        encoding: Encoding::F {
            opcode: "010001",
            format: "10000",
            ft: "sssss",
            fs: "sssss",
            fd: "ddddd",
            funct: "000011",
        },
        notes: None,
        tags: &["divide", "division"],
    },
    Instruction {
        id: "div-d",
        mnemonic: "div.d",
        name: "Floating Point Division Double",
        description: "Calculate the quotient of two double-precision floats",
        usage: "div.d $d, $s, $t",
        result: "d = s / t",
        category: Category::FloatArithmetic,
        encoding: Encoding::F {
            opcode: "010001",
            format: "10001",
            ft: "sssss",
            fs: "sssss",
            fd: "ddddd",
            funct: "000011",
        },
        notes: None,
        tags: &["divide", "division"],
    },
    Instruction {
        id: "sqrt-s",
        mnemonic: "sqrt.s",
        name: "Floating Point Square Root Single",
        description: "Calculate the square root of a single-precision float",
        usage: "sqrt.s $d, $s",
        result: "d = sqrt(s)",
        category: Category::FloatArithmetic,
        encoding: Encoding::F {
            opcode: "010001",
            format: "10000",
            ft: "sssss",
            fs: "sssss",
            fd: "ddddd",
            funct: "000100",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "sqrt-d",
        mnemonic: "sqrt.d",
        name: "Floating Point Square Root Double",
        description: "Calculate the square root of a double-precision float",
        usage: "sqrt.d $d, $s",
        result: "d = sqrt(s)",
        category: Category::FloatArithmetic,
        encoding: Encoding::F {
            opcode: "010001",
            format: "10001",
            ft: "sssss",
            fs: "sssss",
            fd: "ddddd",
            funct: "000100",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "abs-s",
        mnemonic: "abs.s",
        name: "Floating Point Absolute Value Single",
        description: "Calculate the absolute value of a single-precision float",
        usage: "abs.s $d, $s",
        result: "d = |s|",
        category: Category::FloatArithmetic,
        encoding: Encoding::F {
            opcode: "010001",
            format: "00000",
            ft: "-----",
            fs: "sssss",
            fd: "ddddd",
            funct: "000101",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "abs-d",
        mnemonic: "abs.d",
        name: "Floating Point Absolute Value Double",
        description: "Calculate the absolute value of a double-precision float",
        usage: "abs.d $d, $s",
        result: "d = |s|",
        category: Category::FloatArithmetic,
        encoding: Encoding::F {
            opcode: "010001",
            format: "00001",
            ft: "-----",
            fs: "sssss",
            fd: "ddddd",
            funct: "000101",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "neg-s",
        mnemonic: "neg.s",
        name: "Floating Point Negation Single",
        description: "Calculate the negation of a single-precision float",
        usage: "neg.s $d, $s",
        result: "d = -s",
        category: Category::FloatArithmetic,
        encoding: Encoding::F {
            opcode: "010001",
            format: "00000",
            ft: "-----",
            fs: "sssss",
            fd: "ddddd",
            funct: "000111",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "neg-d",
        mnemonic: "neg.d",
        name: "Floating Point Negation Double",
        description: "Calculate the negation of a double-precision float",
        usage: "neg.d $d, $s",
        result: "d = -s",
        category: Category::FloatArithmetic,
        encoding: Encoding::F {
            opcode: "010001",
            format: "00001",
            ft: "-----",
            fs: "sssss",
            fd: "ddddd",
            funct: "000111",
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "c-eq-s",
        mnemonic: "c.eq.s",
        name: "Floating Point Compare Equal Single",
        description: "Check if two single-precision floats are equal",
        usage: "c.eq.s cc, $s, $t",
        result: "conditional cc = s == t",
        category: Category::FloatConditional,
        encoding: Encoding::Fct {
            opcode: "010001",
            format: "10000",
            ft: "ttttt",
            fs: "sssss",
            cc: "ccc",
            cond: "--",
            fc: "11",
            funct: "0010",
        },
        notes: Some("The condition code flag specifies which of the 8 condition codes to store the result in. If it is omitted, 0 is the default."),
        tags: &[],
    },
    Instruction {
        id: "c-eq-d",
        mnemonic: "c.eq.d",
        name: "Floating Point Compare Equal Double",
        description: "Check if two double-precision floats are equal",
        usage: "c.eq.d cc, $s, $t",
        result: "conditional cc = s == t",
        category: Category::FloatConditional,
        encoding: Encoding::Fct {
            opcode: "010001",
            format: "10001",
            ft: "ttttt",
            fs: "sssss",
            cc: "ccc",
            cond: "--",
            fc: "11",
            funct: "0010",
        },
        notes: Some("The condition code flag specifies which of the 8 condition codes to store the result in. If it is omitted, 0 is the default."),
        tags: &[],
    },
    Instruction {
        id: "c-le-s",
        mnemonic: "c.le.s",
        name: "Floating Point Compare Less Than or Equal Single",
        description: "Check if a single-precision float is less than or equal to another single",
        usage: "c.le.s cc, $s, $t",
        result: "conditional cc = s <= t",
        category: Category::FloatConditional,
        encoding: Encoding::Fct {
            opcode: "010001",
            format: "10000",
            ft: "ttttt",
            fs: "sssss",
            cc: "ccc",
            cond: "--",
            fc: "11",
            funct: "1110",
        },
        notes: Some("The condition code flag specifies which of the 8 condition codes to store the result in. If it is omitted, 0 is the default."),
        tags: &[],
    },
    Instruction {
        id: "c-le-d",
        mnemonic: "c.le.d",
        name: "Floating Point Compare Less Than or Equal Double",
        description: "Check if a double-precision float is less than or equal to another double",
        usage: "c.le.d cc, $s, $t",
        result: "conditional cc = s <= t",
        category: Category::FloatConditional,
        encoding: Encoding::Fct {
            opcode: "010001",
            format: "10001",
            ft: "ttttt",
            fs: "sssss",
            cc: "ccc",
            cond: "--",
            fc: "11",
            funct: "1110",
        },
        notes: Some("The condition code flag specifies which of the 8 condition codes to store the result in. If it is omitted, 0 is the default."),
        tags: &[],
    },
    Instruction {
        id: "c-lt-s",
        mnemonic: "c.lt.s",
        name: "Floating Point Compare Less Than Single",
        description: "Check if a single-precision float is less than another single",
        usage: "c.lt.s cc, $s, $t",
        result: "conditional cc = s < t",
        category: Category::FloatConditional,
        encoding: Encoding::Fct {
            opcode: "010001",
            format: "10000",
            ft: "ttttt",
            fs: "sssss",
            cc: "ccc",
            cond: "--",
            fc: "11",
            funct: "1100",
        },
        notes: Some("The condition code flag specifies which of the 8 condition codes to store the result in. If it is omitted, 0 is the default."),
        tags: &[],
    },
    Instruction {
        id: "c-lt-d",
        mnemonic: "c.lt.d",
        name: "Floating Point Compare Less Than Double",
        description: "Check if a double-precision float is less than another double",
        usage: "c.lt.d cc, $s, $t",
        result: "conditional cc = s < t",
        category: Category::FloatConditional,
        encoding: Encoding::Fct {
            opcode: "010001",
            format: "10001",
            ft: "ttttt",
            fs: "sssss",
            cc: "ccc",
            cond: "--",
            fc: "11",
            funct: "1100",
        },
        notes: Some("The condition code flag specifies which of the 8 condition codes to store the result in. If it is omitted, 0 is the default."),
        tags: &[],
    },
    Instruction {
        id: "bc1f",
        mnemonic: "bc1f",
        name: "Branch on Conditional False",
        description: "Branch if a floating point conditional is false",
        usage: "bc1f cc label",
        result: "if (!conditional cc) PC = label;",
        category: Category::FloatConditional,
        encoding: Encoding::Ic {
            opcode: "010001",
            format: "01000",
            cc: "ccc",
            cond: "00",
            imm: "iiiiiiiiiiiiiiii",
        },
        notes: Some("The condition code flag specifies which of the 8 condition codes to check. If it is omitted, 0 is the default."),
        tags: &[],
    },
    Instruction {
        id: "bc1t",
        mnemonic: "bc1t",
        name: "Branch on Conditional True",
        description: "Branch if a floating point conditional is true",
        usage: "bc1t cc label",
        result: "if (conditional cc) PC = label;",
        category: Category::FloatConditional,
        encoding: Encoding::Ic {
            opcode: "010001",
            format: "01000",
            cc: "ccc",
            cond: "01",
            imm: "iiiiiiiiiiiiiiii",
        },
        notes: Some("The condition code flag specifies which of the 8 condition codes to check. If it is omitted, 0 is the default."),
        tags: &[],
    },
    Instruction {
        id: "movf-s",
        mnemonic: "movf.s",
        name: "Floating Point Move on Conditional False Single",
        description: "Move a single-precision float to another register if a conditional is false",
        usage: "movf.s $fd, $fs, cc",
        result: "if (!conditional cc) d = s;",
        category: Category::FloatConditional,
        encoding: Encoding::Fco {
            opcode: "010001",
            format: "10000",
            cc: "ccc",
            cond: "00",
            fs: "sssss",
            fd: "ddddd",
            funct: "010001",
        },
        notes: Some("The condition code flag specifies which of the 8 condition codes to check. If it is omitted, 0 is the default."),
        tags: &[],
    },
    Instruction {
        id: "movf-d",
        mnemonic: "movf.d",
        name: "Floating Point Move on Conditional False Double",
        description: "Move a double-precision float to another register if a conditional is false",
        usage: "movf.s $fd, $fs, cc",
        result: "if (!conditional cc) d = s;",
        category: Category::FloatConditional,
        encoding: Encoding::Fco {
            opcode: "010001",
            format: "10001",
            cc: "ccc",
            cond: "00",
            fs: "sssss",
            fd: "ddddd",
            funct: "010001",
        },
        notes: Some("The condition code flag specifies which of the 8 condition codes to check. If it is omitted, 0 is the default."),
        tags: &[],
    },
    Instruction {
        id: "movt-s",
        mnemonic: "movt.s",
        name: "Floating Point Move on Conditional True Single",
        description: "Move a single-precision float to another register if a conditional is true",
        usage: "movt.s $fd, $fs, cc",
        result: "if (conditional cc) d = s;",
        category: Category::FloatConditional,
        encoding: Encoding::Fco {
            opcode: "010001",
            format: "10000",
            cc: "ccc",
            cond: "01",
            fs: "sssss",
            fd: "ddddd",
            funct: "010001",
        },
        notes: Some("The condition code flag specifies which of the 8 condition codes to check. If it is omitted, 0 is the default."),
        tags: &[],
    },
    Instruction {
        id: "movt-d",
        mnemonic: "movt.d",
        name: "Floating Point Move on Conditional True Double",
        description: "Move a double-precision float to another register if a conditional is true",
        usage: "movt.d $fd, $fs, cc",
        result: "if (conditional cc) d = s;",
        category: Category::FloatConditional,
        encoding: Encoding::Fco {
            opcode: "010001",
            format: "10001",
            cc: "ccc",
            cond: "01",
            fs: "sssss",
            fd: "ddddd",
            funct: "010001",
        },
        notes: Some("The condition code flag specifies which of the 8 condition codes to check. If it is omitted, 0 is the default."),
        tags: &[],
    },
    Instruction {
        id: "lwc1",
        mnemonic: "lwc1",
        name: "Load Word Coprocessor 1",
        description: "Load a word from memory to a floating point register",
        usage: "lwc1 $ft, imm($s)",
        result: "ft = memory[s + imm]",
        category: Category::Memory,
        encoding: Encoding::I {
            opcode: "110001",
            rs: "sssss",
            rt: "ttttt",
            imm: "iiiiiiiiiiiiiiii",
        },
        notes: Some("$ft is a floating point register, $s is a general purpose register."),
        tags: &[],
    },
    Instruction {
        id: "ldc1",
        mnemonic: "ldc1",
        name: "Load Double Coprocessor 1",
        description: "Load two words from memory to two floating point registers",
        usage: "ldc1 $ft, imm($s)",
        result: "ft = memory[s + imm]",
        category: Category::Memory,
        encoding: Encoding::I {
            opcode: "110101",
            rs: "sssss",
            rt: "ttttt",
            imm: "iiiiiiiiiiiiiiii",
        },
        notes: Some("$ft is a floating point register, $s is a general purpose register."),
        tags: &[],
    },
    Instruction {
        id: "swc1",
        mnemonic: "swc1",
        name: "Store Word Coprocessor 1",
        description: "Store a word from a floating point register to memory",
        usage: "swc1 $ft, imm($s)",
        result: "memory[s + imm] = ft",
        category: Category::Memory,
        encoding: Encoding::I {
            opcode: "111001",
            rs: "sssss",
            rt: "ttttt",
            imm: "iiiiiiiiiiiiiiii",
        },
        notes: Some("$ft is a floating point register, $s is a general purpose register."),
        tags: &[],
    },
    Instruction {
        id: "sdc1",
        mnemonic: "sdc1",
        name: "Store Double Coprocessor 1",
        description: "Store two words from memory to two floating point registers",
        usage: "sdc1 $ft, imm($s)",
        result: "memory[s + imm] = ft",
        category: Category::Memory,
        encoding: Encoding::I {
            opcode: "111101",
            rs: "sssss",
            rt: "ttttt",
            imm: "iiiiiiiiiiiiiiii",
        },
        notes: Some("$ft is a floating point register, $s is a general purpose register."),
        tags: &[],
    },
    Instruction {
        id: "l-s",
        mnemonic: "l.s",
        name: "Load Single",
        description: "Load a single-precision floating point value from memory to a register",
        usage: "l.s $ft, label",
        result: "ft = memory[s + imm]",
        category: Category::Memory,
        encoding: Encoding::Pseudo {
            expansion: &[
                "lui $at, label[31-16]",
                "ori $at, $at, label[15-0]",
                "lwc1 $ft, 0($at)",
            ],
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "l-d",
        mnemonic: "l.d",
        name: "Load Double",
        description: "Load a double-precision floating point value from memory to a register",
        usage: "l.d $ft, label",
        result: "ft = memory[s + imm]",
        category: Category::Memory,
        encoding: Encoding::Pseudo {
            expansion: &[
                "lui $at, label[31-16]",
                "ori $at, $at, label[15-0]",
                "ldc1 $ft, 0($at)",
            ],
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "s-s",
        mnemonic: "s.s",
        name: "Store Single",
        description: "Store a single-precision floating point value from memory to a register",
        usage: "s.s $ft, label",
        result: "memory[s + imm] = ft",
        category: Category::Memory,
        encoding: Encoding::Pseudo {
            expansion: &[
                "lui $at, label[31-16]",
                "ori $at, $at, label[15-0]",
                "swc1 $ft, 0($at)",
            ],
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "s-d",
        mnemonic: "s.d",
        name: "Store Double",
        description: "Store a double-precision floating point value from memory to a register",
        usage: "s.d $ft, label",
        result: "memory[s + imm] = ft",
        category: Category::Memory,
        encoding: Encoding::Pseudo {
            expansion: &[
                "lui $at, label[31-16]",
                "ori $at, $at, label[15-0]",
                "sdc1 $ft, 0($at)",
            ],
        },
        notes: None,
        tags: &[],
    },
    Instruction {
        id: "mtc0",
        mnemonic: "mtc0",
        name: "Move to Coprocessor 0",
        description: "Move a value from a general-purpose register to a system control coprocessor register",
        usage: "mtc0 $t, $d",
        result: "d = t",
        category: Category::System,
        encoding: Encoding::Cop {
            opcode: "010000",
            funct: "00100",
            rt: "ttttt",
            rd: "ddddd",
            addr: "-----------",
        },
        notes: Some("The first argument is the register from the main processor, the second is the register from the coprocessor. Unlike most MIPS instructions, the destination of the operation is not listed first."),
        tags: &[],
    },
    Instruction {
        id: "mfc0",
        mnemonic: "mfc0",
        name: "Move from Coprocessor 0",
        description: "Move a value from a system control coprocessor register to a general-purpose register",
        usage: "mfc0 $t, $d",
        result: "t = d",
        category: Category::System,
        encoding: Encoding::Cop {
            opcode: "010000",
            funct: "00000",
            rt: "ttttt",
            rd: "ddddd",
            addr: "-----------",
        },
        notes: Some("The first argument is the register from the main processor, the second is the register from the coprocessor."),
        tags: &[],
    },
];
