// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Mnemonic names and Display implementations.

use crate::{BlockId, ConversionKind, InstKind, RefCountKind, Terminator, ValueId};
use std::fmt;

impl fmt::Display for ValueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "%{:x}", self.0)
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bb{}", self.0)
    }
}

impl InstKind {
    /// The instruction's mnemonic, for logs and diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            InstKind::AllocStack { .. } => "alloc_stack",
            InstKind::AllocRef { .. } => "alloc_ref",
            InstKind::AllocRefDynamic { .. } => "alloc_ref_dynamic",
            InstKind::AllocBox { .. } => "alloc_box",
            InstKind::AllocValueBuffer { .. } => "alloc_value_buffer",
            InstKind::AllocExistentialBox { .. } => "alloc_existential_box",
            InstKind::AllocGlobal { .. } => "alloc_global",
            InstKind::DeallocStack { .. } => "dealloc_stack",
            InstKind::DeallocBox { .. } => "dealloc_box",
            InstKind::DeallocRef { .. } => "dealloc_ref",
            InstKind::DeallocPartialRef { .. } => "dealloc_partial_ref",
            InstKind::DeallocValueBuffer { .. } => "dealloc_value_buffer",
            InstKind::DeallocExistentialBox { .. } => "dealloc_existential_box",
            InstKind::ProjectBox { .. } => "project_box",
            InstKind::ProjectValueBuffer { .. } => "project_value_buffer",
            InstKind::ProjectExistentialBox { .. } => "project_existential_box",
            InstKind::DebugValue { .. } => "debug_value",
            InstKind::Load { .. } => "load",
            InstKind::LoadBorrow { .. } => "load_borrow",
            InstKind::BeginBorrow { .. } => "begin_borrow",
            InstKind::EndBorrow { .. } => "end_borrow",
            InstKind::Store { .. } => "store",
            InstKind::StoreBorrow { .. } => "store_borrow",
            InstKind::Assign { .. } => "assign",
            InstKind::MarkUninitialized { .. } => "mark_uninitialized",
            InstKind::MarkDependence { .. } => "mark_dependence",
            InstKind::CopyAddr { .. } => "copy_addr",
            InstKind::DestroyAddr { .. } => "destroy_addr",
            InstKind::IndexAddr { .. } => "index_addr",
            InstKind::TailAddr { .. } => "tail_addr",
            InstKind::BeginAccess { .. } => "begin_access",
            InstKind::EndAccess { .. } => "end_access",
            InstKind::RefCountOp { kind, .. } => kind.name(),
            InstKind::CopyValue { .. } => "copy_value",
            InstKind::FunctionRef { .. } => "function_ref",
            InstKind::GlobalAddr { .. } => "global_addr",
            InstKind::IntegerLiteral { .. } => "integer_literal",
            InstKind::FloatLiteral { .. } => "float_literal",
            InstKind::StringLiteral { .. } => "string_literal",
            InstKind::Method { .. } => "method",
            InstKind::Apply { .. } => "apply",
            InstKind::PartialApply { .. } => "partial_apply",
            InstKind::BeginApply { .. } => "begin_apply",
            InstKind::EndApply { .. } => "end_apply",
            InstKind::AbortApply { .. } => "abort_apply",
            InstKind::Builtin { .. } => "builtin",
            InstKind::Metatype { .. } => "metatype",
            InstKind::ValueMetatype { .. } => "value_metatype",
            InstKind::ExistentialMetatype { .. } => "existential_metatype",
            InstKind::Tuple { .. } => "tuple",
            InstKind::TupleExtract { .. } => "tuple_extract",
            InstKind::TupleElementAddr { .. } => "tuple_element_addr",
            InstKind::DestructureTuple { .. } => "destructure_tuple",
            InstKind::Struct { .. } => "struct",
            InstKind::StructExtract { .. } => "struct_extract",
            InstKind::StructElementAddr { .. } => "struct_element_addr",
            InstKind::RefElementAddr { .. } => "ref_element_addr",
            InstKind::RefTailAddr { .. } => "ref_tail_addr",
            InstKind::Enum { .. } => "enum",
            InstKind::UncheckedEnumData { .. } => "unchecked_enum_data",
            InstKind::InitEnumDataAddr { .. } => "init_enum_data_addr",
            InstKind::UncheckedTakeEnumDataAddr { .. } => "unchecked_take_enum_data_addr",
            InstKind::InjectEnumAddr { .. } => "inject_enum_addr",
            InstKind::SelectEnum { .. } => "select_enum",
            InstKind::InitExistential { .. } => "init_existential",
            InstKind::DeinitExistential { .. } => "deinit_existential",
            InstKind::OpenExistential { .. } => "open_existential",
            InstKind::Conversion { kind, .. } => kind.name(),
            InstKind::UnconditionalCheckedCast { .. } => "unconditional_checked_cast",
            InstKind::UnconditionalCheckedCastAddr { .. } => "unconditional_checked_cast_addr",
            InstKind::CondFail { .. } => "cond_fail",
            InstKind::KeyPath { .. } => "keypath",
            InstKind::BindMemory { .. } => "bind_memory",
            InstKind::IndexRawPointer { .. } => "index_raw_pointer",
            InstKind::IsUnique { .. } => "is_unique",
            InstKind::IsEscapingClosure { .. } => "is_escaping_closure",
            InstKind::MarkFunctionEscape { .. } => "mark_function_escape",
        }
    }
}

impl RefCountKind {
    pub fn name(self) -> &'static str {
        match self {
            RefCountKind::StrongRetain => "strong_retain",
            RefCountKind::StrongRelease => "strong_release",
            RefCountKind::SetDeallocating => "set_deallocating",
            RefCountKind::RetainValue => "retain_value",
            RefCountKind::RetainValueAddr => "retain_value_addr",
            RefCountKind::UnmanagedRetainValue => "unmanaged_retain_value",
            RefCountKind::ReleaseValue => "release_value",
            RefCountKind::ReleaseValueAddr => "release_value_addr",
            RefCountKind::UnmanagedReleaseValue => "unmanaged_release_value",
            RefCountKind::AutoreleaseValue => "autorelease_value",
            RefCountKind::DestroyValue => "destroy_value",
            RefCountKind::UnownedRetain => "unowned_retain",
            RefCountKind::UnownedRelease => "unowned_release",
            RefCountKind::FixLifetime => "fix_lifetime",
            RefCountKind::EndLifetime => "end_lifetime",
        }
    }
}

impl ConversionKind {
    pub fn name(self) -> &'static str {
        match self {
            ConversionKind::Upcast => "upcast",
            ConversionKind::AddressToPointer => "address_to_pointer",
            ConversionKind::PointerToAddress => "pointer_to_address",
            ConversionKind::UncheckedRefCast => "unchecked_ref_cast",
            ConversionKind::UncheckedAddrCast => "unchecked_addr_cast",
            ConversionKind::UncheckedTrivialBitCast => "unchecked_trivial_bit_cast",
            ConversionKind::UncheckedBitwiseCast => "unchecked_bitwise_cast",
            ConversionKind::RefToRawPointer => "ref_to_raw_pointer",
            ConversionKind::RawPointerToRef => "raw_pointer_to_ref",
            ConversionKind::RefToUnmanaged => "ref_to_unmanaged",
            ConversionKind::UnmanagedToRef => "unmanaged_to_ref",
            ConversionKind::ConvertFunction => "convert_function",
            ConversionKind::ConvertEscapeToNoEscape => "convert_escape_to_noescape",
            ConversionKind::ThinFunctionToPointer => "thin_function_to_pointer",
            ConversionKind::PointerToThinFunction => "pointer_to_thin_function",
            ConversionKind::ThinToThickFunction => "thin_to_thick_function",
            ConversionKind::ThickToObjcMetatype => "thick_to_objc_metatype",
            ConversionKind::ObjcToThickMetatype => "objc_to_thick_metatype",
            ConversionKind::UncheckedOwnershipConversion => "unchecked_ownership_conversion",
            ConversionKind::RefToBridgeObject => "ref_to_bridge_object",
            ConversionKind::BridgeObjectToRef => "bridge_object_to_ref",
            ConversionKind::BridgeObjectToWord => "bridge_object_to_word",
        }
    }
}

impl Terminator {
    pub fn name(&self) -> &'static str {
        match self {
            Terminator::Unreachable => "unreachable",
            Terminator::Return { .. } => "return",
            Terminator::Throw { .. } => "throw",
            Terminator::Yield { .. } => "yield",
            Terminator::Unwind => "unwind",
            Terminator::Br { .. } => "br",
            Terminator::CondBr { .. } => "cond_br",
            Terminator::SwitchValue { .. } => "switch_value",
            Terminator::SwitchEnum { .. } => "switch_enum",
            Terminator::SwitchEnumAddr { .. } => "switch_enum_addr",
            Terminator::CheckedCastBr { .. } => "checked_cast_br",
            Terminator::CheckedCastAddrBr { .. } => "checked_cast_addr_br",
            Terminator::TryApply { .. } => "try_apply",
        }
    }
}
