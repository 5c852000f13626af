pub mod vaultapi;
