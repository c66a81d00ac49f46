//! TLS configuration for daemon RPC connections.
//!
//! Each daemon requires a client certificate issued by the install's private
//! CA, and serves a certificate from that same CA. The client presents the
//! per-service `private_<service>.crt`/`.key` pair and does not validate the
//! server certificate chain or name: [`AcceptAnyServerCert`] is the explicit
//! verifier for that. Handshake signatures are still checked with the ring
//! provider.

use std::path::Path;
use std::sync::Arc;

use rustls::client::danger::{HandshakeSignatureValid, ServerCertVerified, ServerCertVerifier};
use rustls::crypto::{CryptoProvider, WebPkiSupportedAlgorithms};
use rustls::{DigitallySignedStruct, Error as TlsError, SignatureScheme};
use rustls_pki_types::pem::PemObject;
use rustls_pki_types::{CertificateDer, PrivateKeyDer, ServerName, UnixTime};

use crate::error::{Result, RpcError};

/// A client certificate chain and its private key, loaded from PEM files.
pub struct ClientIdentity {
    cert_chain: Vec<CertificateDer<'static>>,
    private_key: PrivateKeyDer<'static>,
}

impl ClientIdentity {
    /// Load a PEM certificate chain and a PEM private key (PKCS#1, PKCS#8 or
    /// SEC1).
    pub fn load(cert_path: &Path, key_path: &Path) -> Result<Self> {
        let cert_chain = CertificateDer::pem_file_iter(cert_path)
            .and_then(|certs| certs.collect::<std::result::Result<Vec<_>, _>>())
            .map_err(|e| RpcError::CertificateLoad {
                path: cert_path.to_path_buf(),
                reason: e.to_string(),
            })?;

        if cert_chain.is_empty() {
            return Err(RpcError::CertificateLoad {
                path: cert_path.to_path_buf(),
                reason: "no certificates found".into(),
            });
        }

        let private_key =
            PrivateKeyDer::from_pem_file(key_path).map_err(|e| RpcError::CertificateLoad {
                path: key_path.to_path_buf(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            cert_chain,
            private_key,
        })
    }
}

/// Build the `rustls::ClientConfig` used for every RPC call.
///
/// TLS 1.2 and 1.3, ring crypto provider, client certificate from
/// `identity`, server certificate accepted as presented.
pub fn build_client_tls_config(identity: ClientIdentity) -> Result<rustls::ClientConfig> {
    let provider = Arc::new(rustls::crypto::ring::default_provider());
    let verifier: Arc<dyn ServerCertVerifier> = Arc::new(AcceptAnyServerCert::new(&provider));

    rustls::ClientConfig::builder_with_provider(provider)
        .with_safe_default_protocol_versions()
        .map_err(|e| RpcError::TlsConfiguration(format!("TLS version config: {e}")))?
        .dangerous()
        .with_custom_certificate_verifier(verifier)
        .with_client_auth_cert(identity.cert_chain, identity.private_key)
        .map_err(|e| RpcError::TlsConfiguration(format!("client cert config: {e}")))
}

/// Server certificate verifier that accepts any certificate.
///
/// No chain, expiry or name checks are made. The handshake signature is
/// verified against the presented certificate's key, so the server must still
/// hold the private key of the certificate it sends.
#[derive(Debug)]
pub struct AcceptAnyServerCert {
    algorithms: WebPkiSupportedAlgorithms,
}

impl AcceptAnyServerCert {
    pub fn new(provider: &CryptoProvider) -> Self {
        Self {
            algorithms: provider.signature_verification_algorithms,
        }
    }
}

impl ServerCertVerifier for AcceptAnyServerCert {
    fn verify_server_cert(
        &self,
        _end_entity: &CertificateDer<'_>,
        _intermediates: &[CertificateDer<'_>],
        _server_name: &ServerName<'_>,
        _ocsp_response: &[u8],
        _now: UnixTime,
    ) -> std::result::Result<ServerCertVerified, TlsError> {
        Ok(ServerCertVerified::assertion())
    }

    fn verify_tls12_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> std::result::Result<HandshakeSignatureValid, TlsError> {
        rustls::crypto::verify_tls12_signature(message, cert, dss, &self.algorithms)
    }

    fn verify_tls13_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> std::result::Result<HandshakeSignatureValid, TlsError> {
        rustls::crypto::verify_tls13_signature(message, cert, dss, &self.algorithms)
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        self.algorithms.supported_schemes()
    }
}
