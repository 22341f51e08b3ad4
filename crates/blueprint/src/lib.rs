//! EIP-5202 blueprint packaging.
//!
//! A blueprint is a deployed contract whose runtime bytecode is itself
//! initcode for further contract creations, prefixed with a version marker
//! so it can never execute on its own. This crate wraps raw initcode into
//! the deployable bootstrap form, decodes deployed blueprints back, and
//! submits the deployment transaction.

pub mod deploy;

pub use deploy::{TxFees, deploy_blueprint, tx_fees};

use thiserror::Error;

/// Version 0 preamble with no extra data: `0xFE` (invalid opcode) followed
/// by the EIP-5202 magic.
pub const EIP5202_PREAMBLE: [u8; 3] = [0xFE, 0x71, 0x00];

/// The deploy stub is `PUSH2 <len> RETURNDATASIZE DUP2 PUSH1 0x0A
/// RETURNDATASIZE CODECOPY RETURN`: copy everything after the stub to memory
/// and return it as the deployed bytecode.
const BOOTSTRAP_LEN: usize = 10;
const BOOTSTRAP_TAIL: [u8; 7] = [0x3D, 0x81, 0x60, 0x0A, 0x3D, 0x39, 0xF3];

#[derive(Debug, Error, Eq, PartialEq)]
pub enum BlueprintError {
    #[error("blueprint bytecode of {0} bytes does not fit the PUSH2 length of the deploy stub")]
    InitcodeTooLarge(usize),
    #[error("bytecode too short to be an EIP-5202 blueprint")]
    Truncated,
    #[error("bytecode does not start with the EIP-5202 magic")]
    BadMagic,
    #[error("reserved length-encoding bits are set in the version byte")]
    ReservedLengthBits,
    #[error("deploy stub is malformed")]
    BadBootstrap,
    #[error("deploy stub encodes length {embedded} but carries {actual} bytes")]
    LengthMismatch { embedded: usize, actual: usize },
}

/// A decoded blueprint: the preamble fields plus the initcode it carries.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Blueprint {
    pub version: u8,
    pub preamble_data: Vec<u8>,
    pub initcode: Vec<u8>,
}

/// Wraps `initcode` into the initcode of a blueprint deployment transaction:
/// the 10-byte deploy stub, the version-0 preamble, then `initcode`
/// unchanged.
pub fn blueprint_initcode(initcode: &[u8]) -> Result<Vec<u8>, BlueprintError> {
    let blueprint_len = EIP5202_PREAMBLE.len() + initcode.len();
    let len: u16 = blueprint_len
        .try_into()
        .map_err(|_| BlueprintError::InitcodeTooLarge(blueprint_len))?;

    let mut code = Vec::with_capacity(BOOTSTRAP_LEN + blueprint_len);
    code.push(0x61);
    code.extend_from_slice(&len.to_be_bytes());
    code.extend_from_slice(&BOOTSTRAP_TAIL);
    code.extend_from_slice(&EIP5202_PREAMBLE);
    code.extend_from_slice(initcode);
    Ok(code)
}

/// Parses deployed blueprint bytecode per EIP-5202.
///
/// The encoder only ever emits version 0 with no preamble data, but deployed
/// blueprints from other tooling may carry either, so the full format is
/// accepted here.
pub fn decode_blueprint(bytecode: &[u8]) -> Result<Blueprint, BlueprintError> {
    let [0xFE, 0x71, rest @ ..] = bytecode else {
        return if bytecode.len() < 3 {
            Err(BlueprintError::Truncated)
        } else {
            Err(BlueprintError::BadMagic)
        };
    };
    let [version_byte, rest @ ..] = rest else {
        return Err(BlueprintError::Truncated);
    };

    let version = version_byte >> 2;
    let n_length_bytes = (version_byte & 0b11) as usize;
    if n_length_bytes == 3 {
        return Err(BlueprintError::ReservedLengthBits);
    }
    if rest.len() < n_length_bytes {
        return Err(BlueprintError::Truncated);
    }
    let (length_bytes, rest) = rest.split_at(n_length_bytes);
    let data_len = length_bytes.iter().fold(0usize, |acc, b| (acc << 8) | usize::from(*b));
    if rest.len() < data_len {
        return Err(BlueprintError::Truncated);
    }
    let (preamble_data, initcode) = rest.split_at(data_len);

    Ok(Blueprint {
        version,
        preamble_data: preamble_data.to_vec(),
        initcode: initcode.to_vec(),
    })
}

/// Strips the deploy stub from the output of [`blueprint_initcode`],
/// checking the embedded length, and returns the blueprint bytecode that
/// would land on chain.
pub fn decode_bootstrap(deploy_code: &[u8]) -> Result<&[u8], BlueprintError> {
    if deploy_code.len() < BOOTSTRAP_LEN {
        return Err(BlueprintError::Truncated);
    }
    let (stub, payload) = deploy_code.split_at(BOOTSTRAP_LEN);
    if stub[0] != 0x61 || stub[3..] != BOOTSTRAP_TAIL {
        return Err(BlueprintError::BadBootstrap);
    }
    let embedded = usize::from(u16::from_be_bytes([stub[1], stub[2]]));
    if embedded != payload.len() {
        return Err(BlueprintError::LengthMismatch {
            embedded,
            actual: payload.len(),
        });
    }
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bootstrap_layout() {
        let code = blueprint_initcode(&[0xAA, 0xBB]).unwrap();
        // PUSH2 0x0005 (preamble + 2 payload bytes), stub tail, preamble,
        // initcode.
        assert_eq!(
            code,
            hex::decode("6100053d81600a3d39f3fe7100aabb").unwrap()
        );
    }

    #[test]
    fn empty_initcode() {
        let code = blueprint_initcode(&[]).unwrap();
        assert_eq!(code, hex::decode("6100033d81600a3d39f3fe7100").unwrap());

        let payload = decode_bootstrap(&code).unwrap();
        let blueprint = decode_blueprint(payload).unwrap();
        assert_eq!(blueprint.version, 0);
        assert!(blueprint.preamble_data.is_empty());
        assert!(blueprint.initcode.is_empty());
    }

    #[test]
    fn round_trips_various_lengths() {
        // Largest initcode whose blueprint still fits the PUSH2 length.
        let max_len = usize::from(u16::MAX) - EIP5202_PREAMBLE.len();
        for len in [1usize, 31, 32, 1024, max_len] {
            let initcode = vec![0x5B; len];
            let code = blueprint_initcode(&initcode).unwrap();

            let payload = decode_bootstrap(&code).unwrap();
            assert_eq!(payload.len(), EIP5202_PREAMBLE.len() + len);

            let blueprint = decode_blueprint(payload).unwrap();
            assert_eq!(blueprint.version, 0);
            assert_eq!(blueprint.preamble_data, Vec::<u8>::new());
            assert_eq!(blueprint.initcode, initcode);
        }
    }

    #[test]
    fn encoding_is_deterministic() {
        let initcode = b"arbitrary initcode bytes";
        assert_eq!(
            blueprint_initcode(initcode).unwrap(),
            blueprint_initcode(initcode).unwrap()
        );
    }

    #[test]
    fn oversized_initcode_is_rejected() {
        let max_len = usize::from(u16::MAX) - EIP5202_PREAMBLE.len();
        assert!(blueprint_initcode(&vec![0; max_len]).is_ok());
        assert_eq!(
            blueprint_initcode(&vec![0; max_len + 1]),
            Err(BlueprintError::InitcodeTooLarge(usize::from(u16::MAX) + 1))
        );
        assert!(matches!(
            blueprint_initcode(&vec![0; usize::from(u16::MAX)]),
            Err(BlueprintError::InitcodeTooLarge(_))
        ));
    }

    #[test]
    fn rejects_bad_magic() {
        assert_eq!(
            decode_blueprint(&[0xFE, 0x72, 0x00, 0x00]),
            Err(BlueprintError::BadMagic)
        );
        assert_eq!(decode_blueprint(&[0xFE, 0x71]), Err(BlueprintError::Truncated));
    }

    #[test]
    fn rejects_reserved_length_bits() {
        assert_eq!(
            decode_blueprint(&[0xFE, 0x71, 0b0000_0011]),
            Err(BlueprintError::ReservedLengthBits)
        );
    }

    #[test]
    fn decodes_versioned_preamble_with_data() {
        // Version 1, one length byte, two bytes of preamble data.
        let bytecode = [0xFE, 0x71, 0b0000_0101, 0x02, 0xCA, 0xFE, 0x60, 0x00];
        let blueprint = decode_blueprint(&bytecode).unwrap();
        assert_eq!(blueprint.version, 1);
        assert_eq!(blueprint.preamble_data, vec![0xCA, 0xFE]);
        assert_eq!(blueprint.initcode, vec![0x60, 0x00]);
    }

    #[test]
    fn rejects_tampered_bootstrap() {
        let mut code = blueprint_initcode(&[0x00]).unwrap();
        code[5] ^= 0xFF;
        assert_eq!(decode_bootstrap(&code), Err(BlueprintError::BadBootstrap));

        let mut code = blueprint_initcode(&[0x00]).unwrap();
        code.push(0x00);
        assert!(matches!(
            decode_bootstrap(&code),
            Err(BlueprintError::LengthMismatch { embedded: 4, actual: 5 })
        ));
    }
}
