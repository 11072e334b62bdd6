/*
Copyright (c) 2020 Todd Stellanova
LICENSE: BSD3 (see LICENSE file)
*/

//! Register programs for each populated (mode, frame rate) pair.
//!
//! Ops are applied in order; some addresses are written more than once on
//! purpose. The COM7 (0x12) write following the soft reset selects the output
//! format and is rewritten at apply time.

use crate::writer::RegisterOp;

pub(super) const QVGA_320_240_15FPS: &[RegisterOp] = &[
    RegisterOp::new(0x12, 0x80, 0, 10),
    RegisterOp::write(0x13, 0x00),

    RegisterOp::write(0x11, 0x03),
    RegisterOp::write(0x12, 0x00),
    RegisterOp::write(0xd5, 0x10),

    RegisterOp::write(0x0c, 0x12),
    RegisterOp::write(0x0d, 0x34),
    RegisterOp::write(0x0e, 0xe3),

    RegisterOp::write(0x17, 0x25),
    RegisterOp::write(0x18, 0xa0),
    RegisterOp::write(0x19, 0x03),
    RegisterOp::write(0x1a, 0xf0),
    RegisterOp::write(0x1b, 0x89),
    RegisterOp::write(0x1e, 0x13),
    RegisterOp::write(0x22, 0x03),
    RegisterOp::write(0x29, 0x17),
    RegisterOp::write(0x2b, 0xf8),
    RegisterOp::write(0x2c, 0x01),
    RegisterOp::write(0x31, 0x50),
    RegisterOp::write(0x32, 0x78),
    RegisterOp::write(0x33, 0xc4),

    RegisterOp::write(0x3a, 0xb4),
    RegisterOp::write(0x36, 0x3f),

    RegisterOp::write(0x04, 0x60),
    RegisterOp::write(0x27, 0x80),
    RegisterOp::write(0x3d, 0x0f),
    RegisterOp::write(0x3e, 0x82),
    RegisterOp::write(0x3f, 0x40),
    RegisterOp::write(0x40, 0x7f),
    RegisterOp::write(0x41, 0x6a),
    RegisterOp::write(0x42, 0x29),
    RegisterOp::write(0x44, 0xe5),
    RegisterOp::write(0x45, 0x41),
    RegisterOp::write(0x47, 0x42),
    RegisterOp::write(0x48, 0x00),
    RegisterOp::write(0x49, 0x61),
    RegisterOp::write(0x4a, 0xa1),
    RegisterOp::write(0x4b, 0x46),
    RegisterOp::write(0x4c, 0x18),
    RegisterOp::write(0x4d, 0x50),
    RegisterOp::write(0x4e, 0x13),
    RegisterOp::write(0x64, 0x00),
    RegisterOp::write(0x67, 0x88),
    RegisterOp::write(0x68, 0x1a),

    RegisterOp::write(0x14, 0x38),
    RegisterOp::write(0x24, 0x3c),
    RegisterOp::write(0x25, 0x30),
    RegisterOp::write(0x26, 0x72),
    RegisterOp::write(0x50, 0x4c),
    RegisterOp::write(0x51, 0x3f),
    RegisterOp::write(0x52, 0x00),
    RegisterOp::write(0x53, 0x00),
    RegisterOp::write(0x20, 0x00),
    RegisterOp::write(0x21, 0x57),
    RegisterOp::write(0x38, 0x14),
    RegisterOp::write(0xe9, 0x00),
    RegisterOp::write(0x56, 0x55),
    RegisterOp::write(0x57, 0xff),
    RegisterOp::write(0x58, 0xff),
    RegisterOp::write(0x59, 0xff),
    RegisterOp::write(0x5f, 0x04),
    RegisterOp::write(0x13, 0xff),

    RegisterOp::write(0x80, 0x7d),
    RegisterOp::write(0x81, 0x3f),
    RegisterOp::write(0x82, 0x3f),
    RegisterOp::write(0x83, 0x03),
    RegisterOp::write(0x38, 0x11),
    RegisterOp::write(0x84, 0x70),
    RegisterOp::write(0x85, 0x00),
    RegisterOp::write(0x86, 0x03),
    RegisterOp::write(0x87, 0x01),
    RegisterOp::write(0x88, 0x05),
    RegisterOp::write(0x89, 0x30),
    RegisterOp::write(0x8d, 0x30),
    RegisterOp::write(0x8f, 0x85),
    RegisterOp::write(0x93, 0x30),
    RegisterOp::write(0x95, 0x85),
    RegisterOp::write(0x99, 0x30),
    RegisterOp::write(0x9b, 0x85),

    RegisterOp::write(0x9c, 0x08),
    RegisterOp::write(0x9d, 0x12),
    RegisterOp::write(0x9e, 0x23),
    RegisterOp::write(0x9f, 0x45),
    RegisterOp::write(0xa0, 0x55),
    RegisterOp::write(0xa1, 0x64),
    RegisterOp::write(0xa2, 0x72),
    RegisterOp::write(0xa3, 0x7f),
    RegisterOp::write(0xa4, 0x8b),
    RegisterOp::write(0xa5, 0x95),
    RegisterOp::write(0xa6, 0xa7),
    RegisterOp::write(0xa7, 0xb5),
    RegisterOp::write(0xa8, 0xcb),
    RegisterOp::write(0xa9, 0xdd),
    RegisterOp::write(0xaa, 0xec),
    RegisterOp::write(0xab, 0x1a),

    RegisterOp::write(0xce, 0x78),
    RegisterOp::write(0xcf, 0x6e),
    RegisterOp::write(0xd0, 0x0a),
    RegisterOp::write(0xd1, 0x0c),
    RegisterOp::write(0xd2, 0x84),
    RegisterOp::write(0xd3, 0x90),
    RegisterOp::write(0xd4, 0x1e),

    RegisterOp::write(0x5a, 0x24),
    RegisterOp::write(0x5b, 0x1f),
    RegisterOp::write(0x5c, 0x88),
    RegisterOp::write(0x5d, 0x60),

    RegisterOp::write(0xac, 0x6e),
    RegisterOp::write(0xbe, 0xff),
    RegisterOp::write(0xbf, 0x00),
    RegisterOp::write(0xe5, 0x8c),

    RegisterOp::write(0x70, 0x00),
    RegisterOp::write(0x71, 0x34),
    RegisterOp::write(0x74, 0x28),
    RegisterOp::write(0x75, 0x98),
    RegisterOp::write(0x76, 0x00),
    RegisterOp::write(0x77, 0x08),
    RegisterOp::write(0x78, 0x01),
    RegisterOp::write(0x79, 0xc2),
    RegisterOp::write(0x7d, 0x02),
    RegisterOp::write(0x7a, 0x9c),
    RegisterOp::write(0x7b, 0x40),
    RegisterOp::write(0xec, 0x02),
    RegisterOp::write(0x7c, 0x0c),
];

pub(super) const QVGA_320_240_30FPS: &[RegisterOp] = &[
    RegisterOp::new(0x12, 0x80, 0, 10),
    RegisterOp::write(0x13, 0x00),

    RegisterOp::write(0x11, 0x01),
    RegisterOp::write(0x12, 0x00),
    RegisterOp::write(0xd5, 0x10),

    RegisterOp::write(0x0c, 0x12),
    RegisterOp::write(0x0d, 0x34),
    RegisterOp::write(0x0e, 0xe3),

    RegisterOp::write(0x17, 0x25),
    RegisterOp::write(0x18, 0xa0),
    RegisterOp::write(0x19, 0x03),
    RegisterOp::write(0x1a, 0xf0),
    RegisterOp::write(0x1b, 0x89),
    RegisterOp::write(0x1e, 0x13),
    RegisterOp::write(0x22, 0x03),
    RegisterOp::write(0x29, 0x17),
    RegisterOp::write(0x2b, 0xf8),
    RegisterOp::write(0x2c, 0x01),
    RegisterOp::write(0x31, 0x50),
    RegisterOp::write(0x32, 0x78),
    RegisterOp::write(0x33, 0xc4),

    RegisterOp::write(0x3a, 0xb4),
    RegisterOp::write(0x36, 0x3f),

    RegisterOp::write(0x04, 0x60),
    RegisterOp::write(0x27, 0x80),
    RegisterOp::write(0x3d, 0x0f),
    RegisterOp::write(0x3e, 0x82),
    RegisterOp::write(0x3f, 0x40),
    RegisterOp::write(0x40, 0x7f),
    RegisterOp::write(0x41, 0x6a),
    RegisterOp::write(0x42, 0x29),
    RegisterOp::write(0x44, 0xe5),
    RegisterOp::write(0x45, 0x41),
    RegisterOp::write(0x47, 0x42),
    RegisterOp::write(0x48, 0x00),
    RegisterOp::write(0x49, 0x61),
    RegisterOp::write(0x4a, 0xa1),
    RegisterOp::write(0x4b, 0x46),
    RegisterOp::write(0x4c, 0x18),
    RegisterOp::write(0x4d, 0x50),
    RegisterOp::write(0x4e, 0x13),
    RegisterOp::write(0x64, 0x00),
    RegisterOp::write(0x67, 0x88),
    RegisterOp::write(0x68, 0x1a),

    RegisterOp::write(0x14, 0x38),
    RegisterOp::write(0x24, 0x3c),
    RegisterOp::write(0x25, 0x30),
    RegisterOp::write(0x26, 0x72),
    RegisterOp::write(0x50, 0x97),
    RegisterOp::write(0x51, 0x7e),
    RegisterOp::write(0x52, 0x00),
    RegisterOp::write(0x53, 0x00),
    RegisterOp::write(0x20, 0x00),
    RegisterOp::write(0x21, 0x23),
    RegisterOp::write(0x38, 0x14),
    RegisterOp::write(0xe9, 0x00),
    RegisterOp::write(0x56, 0x55),
    RegisterOp::write(0x57, 0xff),
    RegisterOp::write(0x58, 0xff),
    RegisterOp::write(0x59, 0xff),
    RegisterOp::write(0x5f, 0x04),
    RegisterOp::write(0x13, 0xff),

    RegisterOp::write(0x80, 0x7d),
    RegisterOp::write(0x81, 0x3f),
    RegisterOp::write(0x82, 0x3f),
    RegisterOp::write(0x83, 0x03),
    RegisterOp::write(0x38, 0x11),
    RegisterOp::write(0x84, 0x70),
    RegisterOp::write(0x85, 0x00),
    RegisterOp::write(0x86, 0x03),
    RegisterOp::write(0x87, 0x01),
    RegisterOp::write(0x88, 0x05),
    RegisterOp::write(0x89, 0x30),
    RegisterOp::write(0x8d, 0x30),
    RegisterOp::write(0x8f, 0x85),
    RegisterOp::write(0x93, 0x30),
    RegisterOp::write(0x95, 0x85),
    RegisterOp::write(0x99, 0x30),
    RegisterOp::write(0x9b, 0x85),

    RegisterOp::write(0x9c, 0x08),
    RegisterOp::write(0x9d, 0x12),
    RegisterOp::write(0x9e, 0x23),
    RegisterOp::write(0x9f, 0x45),
    RegisterOp::write(0xa0, 0x55),
    RegisterOp::write(0xa1, 0x64),
    RegisterOp::write(0xa2, 0x72),
    RegisterOp::write(0xa3, 0x7f),
    RegisterOp::write(0xa4, 0x8b),
    RegisterOp::write(0xa5, 0x95),
    RegisterOp::write(0xa6, 0xa7),
    RegisterOp::write(0xa7, 0xb5),
    RegisterOp::write(0xa8, 0xcb),
    RegisterOp::write(0xa9, 0xdd),
    RegisterOp::write(0xaa, 0xec),
    RegisterOp::write(0xab, 0x1a),

    RegisterOp::write(0xce, 0x78),
    RegisterOp::write(0xcf, 0x6e),
    RegisterOp::write(0xd0, 0x0a),
    RegisterOp::write(0xd1, 0x0c),
    RegisterOp::write(0xd2, 0x84),
    RegisterOp::write(0xd3, 0x90),
    RegisterOp::write(0xd4, 0x1e),

    RegisterOp::write(0x5a, 0x24),
    RegisterOp::write(0x5b, 0x1f),
    RegisterOp::write(0x5c, 0x88),
    RegisterOp::write(0x5d, 0x60),

    RegisterOp::write(0xac, 0x6e),
    RegisterOp::write(0xbe, 0xff),
    RegisterOp::write(0xbf, 0x00),
    RegisterOp::write(0xe5, 0x8c),

    RegisterOp::write(0x70, 0x00),
    RegisterOp::write(0x71, 0x34),
    RegisterOp::write(0x74, 0x28),
    RegisterOp::write(0x75, 0x98),
    RegisterOp::write(0x76, 0x00),
    RegisterOp::write(0x77, 0x08),
    RegisterOp::write(0x78, 0x01),
    RegisterOp::write(0x79, 0xc2),
    RegisterOp::write(0x7d, 0x02),
    RegisterOp::write(0x7a, 0x9c),
    RegisterOp::write(0x7b, 0x40),
    RegisterOp::write(0xec, 0x02),
    RegisterOp::write(0x7c, 0x0c),
];

pub(super) const QVGA_320_240_60FPS: &[RegisterOp] = &[
    RegisterOp::new(0x12, 0x80, 0, 10),
    RegisterOp::write(0x13, 0x00),

    RegisterOp::write(0x11, 0x00),
    RegisterOp::write(0x12, 0x00),
    RegisterOp::write(0xd5, 0x10),

    RegisterOp::write(0x0c, 0x12),
    RegisterOp::write(0x0d, 0x34),
    RegisterOp::write(0x0e, 0xe3),

    RegisterOp::write(0x17, 0x25),
    RegisterOp::write(0x18, 0xa0),
    RegisterOp::write(0x19, 0x03),
    RegisterOp::write(0x1a, 0xf0),
    RegisterOp::write(0x1b, 0x89),
    RegisterOp::write(0x1e, 0x13),
    RegisterOp::write(0x22, 0x03),
    RegisterOp::write(0x29, 0x17),
    RegisterOp::write(0x2b, 0xf8),
    RegisterOp::write(0x2c, 0x01),
    RegisterOp::write(0x31, 0x50),
    RegisterOp::write(0x32, 0x78),
    RegisterOp::write(0x33, 0xc4),

    RegisterOp::write(0x3a, 0xb4),
    RegisterOp::write(0x36, 0x3f),

    RegisterOp::write(0x04, 0x60),
    RegisterOp::write(0x27, 0x80),
    RegisterOp::write(0x3d, 0x0f),
    RegisterOp::write(0x3e, 0x82),
    RegisterOp::write(0x3f, 0x40),
    RegisterOp::write(0x40, 0x7f),
    RegisterOp::write(0x41, 0x6a),
    RegisterOp::write(0x42, 0x29),
    RegisterOp::write(0x44, 0xe5),
    RegisterOp::write(0x45, 0x41),
    RegisterOp::write(0x47, 0x42),
    RegisterOp::write(0x48, 0x00),
    RegisterOp::write(0x49, 0x61),
    RegisterOp::write(0x4a, 0xa1),
    RegisterOp::write(0x4b, 0x46),
    RegisterOp::write(0x4c, 0x18),
    RegisterOp::write(0x4d, 0x50),
    RegisterOp::write(0x4e, 0x13),
    RegisterOp::write(0x64, 0x00),
    RegisterOp::write(0x67, 0x88),
    RegisterOp::write(0x68, 0x1a),

    RegisterOp::write(0x14, 0x38),
    RegisterOp::write(0x24, 0x3c),
    RegisterOp::write(0x25, 0x30),
    RegisterOp::write(0x26, 0x72),
    RegisterOp::write(0x50, 0x97),
    RegisterOp::write(0x51, 0x7e),
    RegisterOp::write(0x52, 0x00),
    RegisterOp::write(0x53, 0x00),
    RegisterOp::write(0x20, 0x00),
    RegisterOp::write(0x21, 0x23),
    RegisterOp::write(0x38, 0x14),
    RegisterOp::write(0xe9, 0x00),
    RegisterOp::write(0x56, 0x55),
    RegisterOp::write(0x57, 0xff),
    RegisterOp::write(0x58, 0xff),
    RegisterOp::write(0x59, 0xff),
    RegisterOp::write(0x5f, 0x04),
    RegisterOp::write(0x13, 0xff),

    RegisterOp::write(0x80, 0x7d),
    RegisterOp::write(0x81, 0x3f),
    RegisterOp::write(0x82, 0x3f),
    RegisterOp::write(0x83, 0x03),
    RegisterOp::write(0x38, 0x11),
    RegisterOp::write(0x84, 0x70),
    RegisterOp::write(0x85, 0x00),
    RegisterOp::write(0x86, 0x03),
    RegisterOp::write(0x87, 0x01),
    RegisterOp::write(0x88, 0x05),
    RegisterOp::write(0x89, 0x30),
    RegisterOp::write(0x8d, 0x30),
    RegisterOp::write(0x8f, 0x85),
    RegisterOp::write(0x93, 0x30),
    RegisterOp::write(0x95, 0x85),
    RegisterOp::write(0x99, 0x30),
    RegisterOp::write(0x9b, 0x85),

    RegisterOp::write(0x9c, 0x08),
    RegisterOp::write(0x9d, 0x12),
    RegisterOp::write(0x9e, 0x23),
    RegisterOp::write(0x9f, 0x45),
    RegisterOp::write(0xa0, 0x55),
    RegisterOp::write(0xa1, 0x64),
    RegisterOp::write(0xa2, 0x72),
    RegisterOp::write(0xa3, 0x7f),
    RegisterOp::write(0xa4, 0x8b),
    RegisterOp::write(0xa5, 0x95),
    RegisterOp::write(0xa6, 0xa7),
    RegisterOp::write(0xa7, 0xb5),
    RegisterOp::write(0xa8, 0xcb),
    RegisterOp::write(0xa9, 0xdd),
    RegisterOp::write(0xaa, 0xec),
    RegisterOp::write(0xab, 0x1a),

    RegisterOp::write(0xce, 0x78),
    RegisterOp::write(0xcf, 0x6e),
    RegisterOp::write(0xd0, 0x0a),
    RegisterOp::write(0xd1, 0x0c),
    RegisterOp::write(0xd2, 0x84),
    RegisterOp::write(0xd3, 0x90),
    RegisterOp::write(0xd4, 0x1e),

    RegisterOp::write(0x5a, 0x24),
    RegisterOp::write(0x5b, 0x1f),
    RegisterOp::write(0x5c, 0x88),
    RegisterOp::write(0x5d, 0x60),

    RegisterOp::write(0xac, 0x6e),
    RegisterOp::write(0xbe, 0xff),
    RegisterOp::write(0xbf, 0x00),
    RegisterOp::write(0xe5, 0x8c),

    RegisterOp::write(0x70, 0x00),
    RegisterOp::write(0x71, 0x34),
    RegisterOp::write(0x74, 0x28),
    RegisterOp::write(0x75, 0x98),
    RegisterOp::write(0x76, 0x00),
    RegisterOp::write(0x77, 0x08),
    RegisterOp::write(0x78, 0x01),
    RegisterOp::write(0x79, 0xc2),
    RegisterOp::write(0x7d, 0x02),
    RegisterOp::write(0x7a, 0x9c),
    RegisterOp::write(0x7b, 0x40),
    RegisterOp::write(0xec, 0x02),
    RegisterOp::write(0x7c, 0x0c),
];

pub(super) const VGA_640_480_15FPS: &[RegisterOp] = &[
    RegisterOp::new(0x12, 0x80, 0, 10),
    RegisterOp::write(0x13, 0x00),

    RegisterOp::write(0x11, 0x03),
    RegisterOp::write(0x12, 0x00),
    RegisterOp::write(0xd5, 0x10),

    RegisterOp::write(0x0c, 0x12),
    RegisterOp::write(0x0d, 0x34),
    RegisterOp::write(0x0e, 0xe3),

    RegisterOp::write(0x17, 0x25),
    RegisterOp::write(0x18, 0xa0),
    RegisterOp::write(0x19, 0x03),
    RegisterOp::write(0x1a, 0xf0),
    RegisterOp::write(0x1b, 0x89),
    RegisterOp::write(0x1e, 0x13),
    RegisterOp::write(0x22, 0x03),
    RegisterOp::write(0x29, 0x17),
    RegisterOp::write(0x2b, 0xf8),
    RegisterOp::write(0x2c, 0x01),
    RegisterOp::write(0x31, 0xa0),
    RegisterOp::write(0x32, 0xf0),
    RegisterOp::write(0x33, 0xc4),

    RegisterOp::write(0x3a, 0xb4),
    RegisterOp::write(0x36, 0x3f),

    RegisterOp::write(0x04, 0x60),
    RegisterOp::write(0x27, 0x80),
    RegisterOp::write(0x3d, 0x0f),
    RegisterOp::write(0x3e, 0x82),
    RegisterOp::write(0x3f, 0x40),
    RegisterOp::write(0x40, 0x7f),
    RegisterOp::write(0x41, 0x6a),
    RegisterOp::write(0x42, 0x29),
    RegisterOp::write(0x44, 0xe5),
    RegisterOp::write(0x45, 0x41),
    RegisterOp::write(0x47, 0x42),
    RegisterOp::write(0x48, 0x00),
    RegisterOp::write(0x49, 0x61),
    RegisterOp::write(0x4a, 0xa1),
    RegisterOp::write(0x4b, 0x46),
    RegisterOp::write(0x4c, 0x18),
    RegisterOp::write(0x4d, 0x50),
    RegisterOp::write(0x4e, 0x13),
    RegisterOp::write(0x64, 0x00),
    RegisterOp::write(0x67, 0x88),
    RegisterOp::write(0x68, 0x1a),

    RegisterOp::write(0x14, 0x38),
    RegisterOp::write(0x24, 0x3c),
    RegisterOp::write(0x25, 0x30),
    RegisterOp::write(0x26, 0x72),
    RegisterOp::write(0x50, 0x4c),
    RegisterOp::write(0x51, 0x3f),
    RegisterOp::write(0x52, 0x00),
    RegisterOp::write(0x53, 0x00),
    RegisterOp::write(0x20, 0x00),
    RegisterOp::write(0x21, 0x57),
    RegisterOp::write(0x38, 0x14),
    RegisterOp::write(0xe9, 0x00),
    RegisterOp::write(0x56, 0x55),
    RegisterOp::write(0x57, 0xff),
    RegisterOp::write(0x58, 0xff),
    RegisterOp::write(0x59, 0xff),
    RegisterOp::write(0x5f, 0x04),
    RegisterOp::write(0x13, 0xff),

    RegisterOp::write(0x80, 0x7d),
    RegisterOp::write(0x81, 0x3f),
    RegisterOp::write(0x82, 0x32),
    RegisterOp::write(0x83, 0x03),
    RegisterOp::write(0x38, 0x11),
    RegisterOp::write(0x84, 0x70),
    RegisterOp::write(0x85, 0x00),
    RegisterOp::write(0x86, 0x03),
    RegisterOp::write(0x87, 0x01),
    RegisterOp::write(0x88, 0x05),
    RegisterOp::write(0x89, 0x30),
    RegisterOp::write(0x8d, 0x30),
    RegisterOp::write(0x8f, 0x85),
    RegisterOp::write(0x93, 0x30),
    RegisterOp::write(0x95, 0x85),
    RegisterOp::write(0x99, 0x30),
    RegisterOp::write(0x9b, 0x85),

    RegisterOp::write(0x9c, 0x08),
    RegisterOp::write(0x9d, 0x12),
    RegisterOp::write(0x9e, 0x23),
    RegisterOp::write(0x9f, 0x45),
    RegisterOp::write(0xa0, 0x55),
    RegisterOp::write(0xa1, 0x64),
    RegisterOp::write(0xa2, 0x72),
    RegisterOp::write(0xa3, 0x7f),
    RegisterOp::write(0xa4, 0x8b),
    RegisterOp::write(0xa5, 0x95),
    RegisterOp::write(0xa6, 0xa7),
    RegisterOp::write(0xa7, 0xb5),
    RegisterOp::write(0xa8, 0xcb),
    RegisterOp::write(0xa9, 0xdd),
    RegisterOp::write(0xaa, 0xec),
    RegisterOp::write(0xab, 0x1a),

    RegisterOp::write(0xce, 0x78),
    RegisterOp::write(0xcf, 0x6e),
    RegisterOp::write(0xd0, 0x0a),
    RegisterOp::write(0xd1, 0x0c),
    RegisterOp::write(0xd2, 0x84),
    RegisterOp::write(0xd3, 0x90),
    RegisterOp::write(0xd4, 0x1e),

    RegisterOp::write(0x5a, 0x24),
    RegisterOp::write(0x5b, 0x1f),
    RegisterOp::write(0x5c, 0x88),
    RegisterOp::write(0x5d, 0x60),

    RegisterOp::write(0xac, 0x6e),
    RegisterOp::write(0xbe, 0xff),
    RegisterOp::write(0xbf, 0x00),

    RegisterOp::write(0x70, 0x00),
    RegisterOp::write(0x71, 0x34),
    RegisterOp::write(0x74, 0x28),
    RegisterOp::write(0x75, 0x98),
    RegisterOp::write(0x76, 0x00),
    RegisterOp::write(0x77, 0x08),
    RegisterOp::write(0x78, 0x01),
    RegisterOp::write(0x79, 0xc2),
    RegisterOp::write(0x7d, 0x02),
    RegisterOp::write(0x7a, 0x9c),
    RegisterOp::write(0x7b, 0x40),
    RegisterOp::write(0xec, 0x82),
    RegisterOp::write(0x7c, 0x0c),
];

pub(super) const VGA_640_480_30FPS: &[RegisterOp] = &[
    RegisterOp::new(0x12, 0x80, 0, 10),
    RegisterOp::write(0x13, 0x00),

    RegisterOp::write(0x11, 0x01),
    RegisterOp::write(0x12, 0x00),
    RegisterOp::write(0xd5, 0x10),

    RegisterOp::write(0x0c, 0x12),
    RegisterOp::write(0x0d, 0x34),
    RegisterOp::write(0x0e, 0xe3),

    RegisterOp::write(0x17, 0x25),
    RegisterOp::write(0x18, 0xa0),
    RegisterOp::write(0x19, 0x03),
    RegisterOp::write(0x1a, 0xf0),
    RegisterOp::write(0x1b, 0x89),
    RegisterOp::write(0x1e, 0x13),
    RegisterOp::write(0x22, 0x03),
    RegisterOp::write(0x29, 0x17),
    RegisterOp::write(0x2b, 0xf8),
    RegisterOp::write(0x2c, 0x01),
    RegisterOp::write(0x31, 0xa0),
    RegisterOp::write(0x32, 0xf0),
    RegisterOp::write(0x33, 0xc4),

    RegisterOp::write(0x3a, 0xb4),
    RegisterOp::write(0x36, 0x3f),

    RegisterOp::write(0x04, 0x60),
    RegisterOp::write(0x27, 0x80),
    RegisterOp::write(0x3d, 0x0f),
    RegisterOp::write(0x3e, 0x82),
    RegisterOp::write(0x3f, 0x40),
    RegisterOp::write(0x40, 0x7f),
    RegisterOp::write(0x41, 0x6a),
    RegisterOp::write(0x42, 0x29),
    RegisterOp::write(0x44, 0xe5),
    RegisterOp::write(0x45, 0x41),
    RegisterOp::write(0x47, 0x42),
    RegisterOp::write(0x48, 0x00),
    RegisterOp::write(0x49, 0x61),
    RegisterOp::write(0x4a, 0xa1),
    RegisterOp::write(0x4b, 0x46),
    RegisterOp::write(0x4c, 0x18),
    RegisterOp::write(0x4d, 0x50),
    RegisterOp::write(0x4e, 0x13),
    RegisterOp::write(0x64, 0x00),
    RegisterOp::write(0x67, 0x88),
    RegisterOp::write(0x68, 0x1a),

    RegisterOp::write(0x14, 0x38),
    RegisterOp::write(0x24, 0x3c),
    RegisterOp::write(0x25, 0x30),
    RegisterOp::write(0x26, 0x72),
    RegisterOp::write(0x50, 0x97),
    RegisterOp::write(0x51, 0x7e),
    RegisterOp::write(0x52, 0x00),
    RegisterOp::write(0x53, 0x00),
    RegisterOp::write(0x20, 0x00),
    RegisterOp::write(0x21, 0x23),
    RegisterOp::write(0x38, 0x14),
    RegisterOp::write(0xe9, 0x00),
    RegisterOp::write(0x56, 0x55),
    RegisterOp::write(0x57, 0xff),
    RegisterOp::write(0x58, 0xff),
    RegisterOp::write(0x59, 0xff),
    RegisterOp::write(0x5f, 0x04),
    RegisterOp::write(0x13, 0xff),

    RegisterOp::write(0x80, 0x7d),
    RegisterOp::write(0x81, 0x3f),
    RegisterOp::write(0x82, 0x32),
    RegisterOp::write(0x83, 0x03),
    RegisterOp::write(0x38, 0x11),
    RegisterOp::write(0x84, 0x70),
    RegisterOp::write(0x85, 0x00),
    RegisterOp::write(0x86, 0x03),
    RegisterOp::write(0x87, 0x01),
    RegisterOp::write(0x88, 0x05),
    RegisterOp::write(0x89, 0x30),
    RegisterOp::write(0x8d, 0x30),
    RegisterOp::write(0x8f, 0x85),
    RegisterOp::write(0x93, 0x30),
    RegisterOp::write(0x95, 0x85),
    RegisterOp::write(0x99, 0x30),
    RegisterOp::write(0x9b, 0x85),

    RegisterOp::write(0x9c, 0x08),
    RegisterOp::write(0x9d, 0x12),
    RegisterOp::write(0x9e, 0x23),
    RegisterOp::write(0x9f, 0x45),
    RegisterOp::write(0xa0, 0x55),
    RegisterOp::write(0xa1, 0x64),
    RegisterOp::write(0xa2, 0x72),
    RegisterOp::write(0xa3, 0x7f),
    RegisterOp::write(0xa4, 0x8b),
    RegisterOp::write(0xa5, 0x95),
    RegisterOp::write(0xa6, 0xa7),
    RegisterOp::write(0xa7, 0xb5),
    RegisterOp::write(0xa8, 0xcb),
    RegisterOp::write(0xa9, 0xdd),
    RegisterOp::write(0xaa, 0xec),
    RegisterOp::write(0xab, 0x1a),

    RegisterOp::write(0xce, 0x78),
    RegisterOp::write(0xcf, 0x6e),
    RegisterOp::write(0xd0, 0x0a),
    RegisterOp::write(0xd1, 0x0c),
    RegisterOp::write(0xd2, 0x84),
    RegisterOp::write(0xd3, 0x90),
    RegisterOp::write(0xd4, 0x1e),

    RegisterOp::write(0x5a, 0x24),
    RegisterOp::write(0x5b, 0x1f),
    RegisterOp::write(0x5c, 0x88),
    RegisterOp::write(0x5d, 0x60),

    RegisterOp::write(0xac, 0x6e),
    RegisterOp::write(0xbe, 0xff),
    RegisterOp::write(0xbf, 0x00),

    RegisterOp::write(0x70, 0x00),
    RegisterOp::write(0x71, 0x34),
    RegisterOp::write(0x74, 0x28),
    RegisterOp::write(0x75, 0x98),
    RegisterOp::write(0x76, 0x00),
    RegisterOp::write(0x77, 0x08),
    RegisterOp::write(0x78, 0x01),
    RegisterOp::write(0x79, 0xc2),
    RegisterOp::write(0x7d, 0x02),
    RegisterOp::write(0x7a, 0x9c),
    RegisterOp::write(0x7b, 0x40),
    RegisterOp::write(0xec, 0x82),
    RegisterOp::write(0x7c, 0x0c),
];
