/// Stack frame markers. Position is the marker's ordinal.
pub static FRAME_MARKERS: &[&str] = &[
    "ENTRY",
    "CONSTRUCT_ENTRY",
    "EXIT",
    "WASM",
    "WASM_TO_JS",
    "WASM_TO_JS_FUNCTION",
    "JS_TO_WASM",
    "STACK_SWITCH",
    "WASM_DEBUG_BREAK",
    "C_WASM_ENTRY",
    "WASM_EXIT",
    "WASM_COMPILE_LAZY",
    "INTERPRETED",
    "BASELINE",
    "MAGLEV",
    "TURBOFAN",
    "STUB",
    "TURBOFAN_STUB_WITH_CONTEXT",
    "BUILTIN_CONTINUATION",
    "JAVA_SCRIPT_BUILTIN_CONTINUATION",
    "JAVA_SCRIPT_BUILTIN_CONTINUATION_WITH_CATCH",
    "INTERNAL",
    "CONSTRUCT",
    "BUILTIN",
    "BUILTIN_EXIT",
    "NATIVE",
];
