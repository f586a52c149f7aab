// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Instruction and terminator kinds.
//!
//! One variant per distinct lowering shape. Families whose members differ
//! only in name (reference counting, representational conversions, dynamic
//! dispatch) carry a sub-kind enum instead of one variant each, so the
//! lowering dispatch stays exhaustive without repeating identical arms.

use crate::{BlockId, ValueId};
use silt_ast::SourceRange;

/// An instruction with its source position, if the frontend recorded one.
#[derive(Debug, Clone)]
pub struct Instr {
    pub kind: InstKind,
    pub pos: Option<SourceRange>,
}

#[derive(Debug, Clone)]
pub enum InstKind {
    // ── Allocation and deallocation ─────────────────────────────────────
    AllocStack {
        result: ValueId,
        ty: String,
        /// Source-level variable name from debug info.
        hint: Option<String>,
    },
    AllocRef {
        result: ValueId,
        ty: String,
    },
    AllocRefDynamic {
        result: ValueId,
        ty: String,
    },
    AllocBox {
        result: ValueId,
        ty: String,
        hint: Option<String>,
    },
    AllocValueBuffer {
        result: ValueId,
        ty: String,
        operand: ValueId,
    },
    AllocExistentialBox {
        result: ValueId,
        ty: String,
    },
    AllocGlobal {
        name: String,
    },
    DeallocStack {
        operand: ValueId,
    },
    DeallocBox {
        operand: ValueId,
    },
    DeallocRef {
        operand: ValueId,
    },
    DeallocPartialRef {
        instance: ValueId,
        metatype: ValueId,
    },
    DeallocValueBuffer {
        operand: ValueId,
    },
    DeallocExistentialBox {
        operand: ValueId,
    },
    ProjectBox {
        result: ValueId,
        operand: ValueId,
    },
    ProjectValueBuffer {
        result: ValueId,
        operand: ValueId,
    },
    ProjectExistentialBox {
        result: ValueId,
        operand: ValueId,
    },

    // ── Debug info ──────────────────────────────────────────────────────
    DebugValue {
        operand: ValueId,
        name: Option<String>,
    },

    // ── Memory access ───────────────────────────────────────────────────
    Load {
        result: ValueId,
        operand: ValueId,
    },
    LoadBorrow {
        result: ValueId,
        operand: ValueId,
    },
    BeginBorrow {
        result: ValueId,
        operand: ValueId,
    },
    EndBorrow {
        operand: ValueId,
    },
    Store {
        src: ValueId,
        dest: ValueId,
    },
    StoreBorrow {
        src: ValueId,
        dest: ValueId,
    },
    Assign {
        src: ValueId,
        dest: ValueId,
    },
    MarkUninitialized {
        result: ValueId,
        operand: ValueId,
    },
    MarkDependence {
        result: ValueId,
        value: ValueId,
        base: ValueId,
    },
    CopyAddr {
        src: ValueId,
        dest: ValueId,
    },
    DestroyAddr {
        operand: ValueId,
    },
    IndexAddr {
        result: ValueId,
        base: ValueId,
        index: ValueId,
    },
    TailAddr {
        result: ValueId,
        base: ValueId,
        index: ValueId,
    },
    BeginAccess {
        result: ValueId,
        operand: ValueId,
    },
    EndAccess {
        operand: ValueId,
    },

    // ── Reference counting (no observable dataflow) ─────────────────────
    RefCountOp {
        kind: RefCountKind,
        operand: ValueId,
    },
    CopyValue {
        result: ValueId,
        operand: ValueId,
    },

    // ── Literals ────────────────────────────────────────────────────────
    FunctionRef {
        result: ValueId,
        name: String,
    },
    GlobalAddr {
        result: ValueId,
        name: String,
        ty: String,
    },
    IntegerLiteral {
        result: ValueId,
        value: i128,
    },
    FloatLiteral {
        result: ValueId,
        /// Bit width of the literal's floating type.
        bits: u32,
        value: f64,
        /// Exact decimal rendering, used when `value` cannot represent it.
        text: String,
    },
    StringLiteral {
        result: ValueId,
        value: String,
    },

    // ── Dynamic dispatch ────────────────────────────────────────────────
    Method {
        result: ValueId,
        kind: MethodKind,
        /// Receiver value; absent for protocol-table lookups.
        receiver: Option<ValueId>,
        /// Class or protocol the member is looked up on.
        holder: String,
        member: String,
    },

    // ── Apply family ────────────────────────────────────────────────────
    Apply {
        result: ValueId,
        callee: ValueId,
        args: Vec<ValueId>,
    },
    PartialApply {
        result: ValueId,
        callee: ValueId,
        args: Vec<ValueId>,
    },
    BeginApply {
        results: Vec<ValueId>,
        token: ValueId,
        callee: ValueId,
        args: Vec<ValueId>,
    },
    EndApply {
        token: ValueId,
    },
    AbortApply {
        token: ValueId,
    },
    Builtin {
        result: ValueId,
        name: String,
        args: Vec<ValueId>,
    },

    // ── Metatypes ───────────────────────────────────────────────────────
    Metatype {
        result: ValueId,
        ty: String,
    },
    ValueMetatype {
        result: ValueId,
        ty: String,
        operand: ValueId,
    },
    ExistentialMetatype {
        result: ValueId,
        ty: String,
        operand: ValueId,
    },

    // ── Aggregates ──────────────────────────────────────────────────────
    Tuple {
        result: ValueId,
        elements: Vec<ValueId>,
    },
    TupleExtract {
        result: ValueId,
        operand: ValueId,
        index: u32,
    },
    TupleElementAddr {
        result: ValueId,
        operand: ValueId,
        index: u32,
    },
    DestructureTuple {
        results: Vec<ValueId>,
        operand: ValueId,
    },
    Struct {
        result: ValueId,
        ty: String,
        fields: Vec<(String, ValueId)>,
    },
    StructExtract {
        result: ValueId,
        operand: ValueId,
        field: String,
    },
    StructElementAddr {
        result: ValueId,
        operand: ValueId,
        field: String,
    },
    RefElementAddr {
        result: ValueId,
        operand: ValueId,
        field: String,
    },
    RefTailAddr {
        result: ValueId,
        operand: ValueId,
    },

    // ── Enums ───────────────────────────────────────────────────────────
    Enum {
        result: ValueId,
        ty: String,
        case: String,
        payload: Option<ValueId>,
    },
    UncheckedEnumData {
        result: ValueId,
        operand: ValueId,
    },
    InitEnumDataAddr {
        result: ValueId,
        operand: ValueId,
    },
    UncheckedTakeEnumDataAddr {
        result: ValueId,
        operand: ValueId,
    },
    InjectEnumAddr {
        operand: ValueId,
        case: String,
    },
    SelectEnum {
        result: ValueId,
        operand: ValueId,
        cases: Vec<(String, ValueId)>,
        default: Option<ValueId>,
    },

    // ── Existentials ────────────────────────────────────────────────────
    InitExistential {
        result: ValueId,
        operand: ValueId,
        ty: String,
    },
    DeinitExistential {
        operand: ValueId,
    },
    OpenExistential {
        result: ValueId,
        operand: ValueId,
        ty: String,
    },

    // ── Conversions ─────────────────────────────────────────────────────
    Conversion {
        result: ValueId,
        operand: ValueId,
        ty: String,
        kind: ConversionKind,
    },
    UnconditionalCheckedCast {
        result: ValueId,
        operand: ValueId,
        ty: String,
    },
    UnconditionalCheckedCastAddr {
        src: ValueId,
        dest: ValueId,
        ty: String,
    },

    // ── Runtime checks ──────────────────────────────────────────────────
    CondFail {
        operand: ValueId,
        message: Option<String>,
    },

    // ── Recognized but not lowered ──────────────────────────────────────
    KeyPath {
        result: ValueId,
    },
    BindMemory {
        base: ValueId,
        index: ValueId,
    },
    IndexRawPointer {
        result: ValueId,
        base: ValueId,
        index: ValueId,
    },
    IsUnique {
        result: ValueId,
        operand: ValueId,
    },
    IsEscapingClosure {
        result: ValueId,
        operand: ValueId,
    },
    MarkFunctionEscape {
        operands: Vec<ValueId>,
    },
}

/// Reference-counting operations. All of them are identity-preserving and
/// lower to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefCountKind {
    StrongRetain,
    StrongRelease,
    SetDeallocating,
    RetainValue,
    RetainValueAddr,
    UnmanagedRetainValue,
    ReleaseValue,
    ReleaseValueAddr,
    UnmanagedReleaseValue,
    AutoreleaseValue,
    DestroyValue,
    UnownedRetain,
    UnownedRelease,
    FixLifetime,
    EndLifetime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind {
    Class,
    Super,
    Objc,
    ObjcSuper,
    Witness,
}

/// Pure conversions between representations of the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionKind {
    Upcast,
    AddressToPointer,
    PointerToAddress,
    UncheckedRefCast,
    UncheckedAddrCast,
    UncheckedTrivialBitCast,
    UncheckedBitwiseCast,
    RefToRawPointer,
    RawPointerToRef,
    RefToUnmanaged,
    UnmanagedToRef,
    ConvertFunction,
    ConvertEscapeToNoEscape,
    ThinFunctionToPointer,
    PointerToThinFunction,
    ThinToThickFunction,
    ThickToObjcMetatype,
    ObjcToThickMetatype,
    UncheckedOwnershipConversion,
    RefToBridgeObject,
    BridgeObjectToRef,
    BridgeObjectToWord,
}

impl ConversionKind {
    /// Conversions that change only the calling-convention or ownership
    /// annotation of a value. These pass the operand through untouched
    /// instead of wrapping it in a cast.
    pub fn is_representational(self) -> bool {
        matches!(
            self,
            ConversionKind::ConvertFunction
                | ConversionKind::ConvertEscapeToNoEscape
                | ConversionKind::ThinToThickFunction
                | ConversionKind::UncheckedOwnershipConversion
        )
    }
}

/// Terminators - every block ends in exactly one.
#[derive(Debug, Clone)]
pub enum Terminator {
    Unreachable,
    Return {
        value: Option<ValueId>,
    },
    Throw {
        value: ValueId,
    },
    Yield {
        values: Vec<ValueId>,
        resume: BlockId,
        unwind: BlockId,
    },
    Unwind,
    Br {
        dest: BlockId,
        args: Vec<ValueId>,
    },
    CondBr {
        cond: ValueId,
        true_dest: BlockId,
        true_args: Vec<ValueId>,
        false_dest: BlockId,
        false_args: Vec<ValueId>,
    },
    SwitchValue {
        operand: ValueId,
        cases: Vec<(ValueId, BlockId)>,
        default: Option<BlockId>,
    },
    SwitchEnum {
        operand: ValueId,
        cases: Vec<(String, BlockId)>,
        default: Option<BlockId>,
    },
    SwitchEnumAddr {
        operand: ValueId,
        cases: Vec<(String, BlockId)>,
        default: Option<BlockId>,
    },
    CheckedCastBr {
        operand: ValueId,
        ty: String,
        success: BlockId,
        failure: BlockId,
    },
    CheckedCastAddrBr {
        src: ValueId,
        dest: ValueId,
        ty: String,
        success: BlockId,
        failure: BlockId,
    },
    TryApply {
        callee: ValueId,
        args: Vec<ValueId>,
        normal: BlockId,
        error: BlockId,
    },
}
