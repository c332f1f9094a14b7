// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

//! Precision constants, floor-truncated.

/// log10(2) with 128 fractional bits, i.e. 1 / log2(10)
pub const LOG10_2_X128: u128 = 0x4d104d42_7de7fbcc_47c4acd6_05be48bc;

/// 1 / log2(1.0001) in Q64.64, ≈ 6931.8183734137953552
pub const INV_LOG2_1_0001_X64: u128 = 0x1b13_d180eb88_2abba642;

/// `POW2_FRACTION_TABLE[i]` = 2^(2^-(i+1)) in Q1.127
pub const POW2_FRACTION_TABLE: [u128; 64] = [
    0xb504f333_f9de6484_597d89b3_754abe9f, // 2^(2^-1)
    0x9837f051_8db8a96f_46ad2318_2e42f6f6, // 2^(2^-2)
    0x8b95c1e3_ea8bd6e6_fbe46287_58a53c90, // 2^(2^-3)
    0x85aac367_cc487b14_c5c95b8c_2154c1b2, // 2^(2^-4)
    0x82cd8698_ac2ba1d7_3e2a475b_46520bff, // 2^(2^-5)
    0x8164d1f3_bc030773_7be56527_bd14def4, // 2^(2^-6)
    0x80b1ed4f_d999ab6c_25335719_b6e6fd20, // 2^(2^-7)
    0x8058d7d2_d5e5f6b0_94d589f6_08ee4aa2, // 2^(2^-8)
    0x802c6436_d0e04f50_ff8ce94a_6797b3ce, // 2^(2^-9)
    0x8016302f_17467628_3690dfe4_4d11d008, // 2^(2^-10)
    0x800b179c_82028fd0_945e54e2_ae18f2f0, // 2^(2^-11)
    0x80058baf_7fee3b5d_1c718b38_e549cb93, // 2^(2^-12)
    0x8002c5d0_0fdcfcb6_b6566a58_c048be1f, // 2^(2^-13)
    0x800162e6_1bed4a48_e84c2e1a_463473d9, // 2^(2^-14)
    0x8000b172_92f702a3_aa22beac_ca949013, // 2^(2^-15)
    0x800058b9_2abbae02_030c5fa5_256f41fe, // 2^(2^-16)
    0x80002c5c_8dade4d7_1776c0f4_dbea67d6, // 2^(2^-17)
    0x8000162e_44eaf636_526be456_600bdbe4, // 2^(2^-18)
    0x80000b17_21fa7c18_8307016c_1cd4e8b6, // 2^(2^-19)
    0x8000058b_90de7e4c_ecfc4875_03488bb1, // 2^(2^-20)
    0x800002c5_c8678f36_cbfce50a_6de60b14, // 2^(2^-21)
    0x80000162_e431db9f_80b2347b_5d62e516, // 2^(2^-22)
    0x800000b1_721872d0_c7b08cf1_e0114152, // 2^(2^-23)
    0x80000058_b90c1aa8_a5c3736c_b77e8dff, // 2^(2^-24)
    0x8000002c_5c8605a4_635f2efc_2362d978, // 2^(2^-25)
    0x80000016_2e4300e6_35cf4a10_9e3939bd, // 2^(2^-26)
    0x8000000b_17217ff8_1bef9c55_1590cf83, // 2^(2^-27)
    0x80000005_8b90bfdd_4e39cd52_c0cfa27c, // 2^(2^-28)
    0x80000002_c5c85fe6_f72d669e_0e76e411, // 2^(2^-29)
    0x80000001_62e42ff1_8f9ad351_86d0df28, // 2^(2^-30)
    0x80000000_b17217f8_4cce71aa_0dcfffe7, // 2^(2^-31)
    0x80000000_58b90bfc_07a77ad5_6ed22aaa, // 2^(2^-32)
    0x80000000_2c5c85fd_fc23cdea_d40da8d6, // 2^(2^-33)
    0x80000000_162e42fe_fc25eb15_71853a66, // 2^(2^-34)
    0x80000000_0b17217f_7d97f692_baacded5, // 2^(2^-35)
    0x80000000_058b90bf_bead3b8b_5dd254d7, // 2^(2^-36)
    0x80000000_02c5c85f_df4eedd6_2f084e67, // 2^(2^-37)
    0x80000000_0162e42f_efa58aef_378bf586, // 2^(2^-38)
    0x80000000_00b17217_f7d24a78_a3c7ef02, // 2^(2^-39)
    0x80000000_0058b90b_fbe9067c_93e474a6, // 2^(2^-40)
    0x80000000_002c5c85_fdf47b8e_5a72599f, // 2^(2^-41)
    0x80000000_00162e42_fefa3bdb_315934a2, // 2^(2^-42)
    0x80000000_000b1721_7f7d1d72_99b49c46, // 2^(2^-43)
    0x80000000_00058b90_bfbe8e9a_8d1c4ea0, // 2^(2^-44)
    0x80000000_0002c5c8_5fdf4745_969ea76f, // 2^(2^-45)
    0x80000000_000162e4_2fefa3a0_df5373bf, // 2^(2^-46)
    0x80000000_0000b172_17f7d1cf_f4aac1e1, // 2^(2^-47)
    0x80000000_000058b9_0bfbe8e7_db95a2f1, // 2^(2^-48)
    0x80000000_00002c5c_85fdf473_e61ae1f8, // 2^(2^-49)
    0x80000000_0000162e_42fefa39_f121751c, // 2^(2^-50)
    0x80000000_00000b17_217f7d1c_f815bb96, // 2^(2^-51)
    0x80000000_0000058b_90bfbe8e_7bec1e0d, // 2^(2^-52)
    0x80000000_000002c5_c85fdf47_3dee5f17, // 2^(2^-53)
    0x80000000_00000162_e42fefa3_9ef5438f, // 2^(2^-54)
    0x80000000_000000b1_7217f7d1_cf7a26c8, // 2^(2^-55)
    0x80000000_00000058_b90bfbe8_e7bcf4a4, // 2^(2^-56)
    0x80000000_0000002c_5c85fdf4_73de72a2, // 2^(2^-57)
    0x80000000_00000016_2e42fefa_39ef3765, // 2^(2^-58)
    0x80000000_0000000b_17217f7d_1cf79b37, // 2^(2^-59)
    0x80000000_00000005_8b90bfbe_8e7bcd7d, // 2^(2^-60)
    0x80000000_00000002_c5c85fdf_473de6b6, // 2^(2^-61)
    0x80000000_00000001_62e42fef_a39ef359, // 2^(2^-62)
    0x80000000_00000000_b17217f7_d1cf79ac, // 2^(2^-63)
    0x80000000_00000000_58b90bfb_e8e7bcd6, // 2^(2^-64)
];
