use crate::model::Syscall;

pub static SYSCALLS: &[Syscall] = &[
    Syscall {
        id: "print-integer",
        name: "Print Integer",
        description: "Print an integer to the console",
        code: 1,
        inputs: "$a0 = integer to print",
        outputs: "<none>",
        notes: None,
    },
    Syscall {
        id: "print-float",
        name: "Print Float",
        description: "Print a float to the console",
        code: 2,
        inputs: "$f12 = float to print",
        outputs: "<none>",
        notes: None,
    },
    Syscall {
        id: "print-double",
        name: "Print Double",
        description: "Print a double to the console",
        code: 3,
        inputs: "$f12 = float to print",
        outputs: "<none>",
        notes: None,
    },
    Syscall {
        id: "print-string",
        name: "Print String",
        description: "Print a string to the console",
        code: 4,
        inputs: "$a0 = address of string to print",
        outputs: "<none>",
        notes: Some("The string must be null terminated."),
    },
    Syscall {
        id: "read-int",
        name: "Read Integer",
        description: "Read an integer from the console",
        code: 5,
        inputs: "<none>",
        outputs: "$v0 = inputted integer",
        notes: None,
    },
    Syscall {
        id: "read-float",
        name: "Read Float",
        description: "Read a float from the console",
        code: 6,
        inputs: "<none>",
        outputs: "$f0 = inputted float",
        notes: None,
    },
    Syscall {
        id: "read-double",
        name: "Read Double",
        description: "Read a double from the console",
        code: 7,
        inputs: "<none>",
        outputs: "$f0 = inputted double",
        notes: None,
    },
    Syscall {
        id: "read-string",
        name: "Read String",
        description: "Read a string from the console",
        code: 8,
        inputs: "$a0 = address to store inputted string; $a1 = number of characters to read",
        outputs: "<none>",
        notes: Some("The number of characters to read (specified in $a1) is a maximum; the syscall will keep reading characters until you enter a newline (press enter) or it reaches the maximum. If you press enter before the maximum number of characters has been read, the newline character (ASCII value 10) will be included in the inputted string. The number of characters to read also includes the null terminator. Thus, the maximum number of characters which can be read from the console is actually one less than number specified."),
    },
    Syscall {
        id: "allocate-memory",
        name: "Allocate Memory",
        description: "Allocate memory dynamically",
        code: 9,
        inputs: "$a0 = number of bytes to allocate",
        outputs: "$v0 = address of allocated memory",
        notes: None,
    },
    Syscall {
        id: "exit",
        name: "Exit",
        description: "Exit the program",
        code: 10,
        inputs: "<none>",
        outputs: "<none>",
        notes: None,
    },
    Syscall {
        id: "print-character",
        name: "Print Character",
        description: "Print a character to the console",
        code: 11,
        inputs: "$a0 = character to print (ascii value)",
        outputs: "<none>",
        notes: None,
    },
    Syscall {
        id: "read-character",
        name: "Read Character",
        description: "Read a character from the console",
        code: 12,
        inputs: "<none>",
        outputs: "$v0 = inputted character (ascii value)",
        notes: None,
    },
];
