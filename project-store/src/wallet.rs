//! What the pages need from a wallet connector.

pub trait WalletConnector {
    /// Currently connected account, if any.
    fn active_address(&self) -> Option<String>;
    fn connect(&mut self, address: &str);
    fn disconnect(&mut self);
}

/// Holds an address the user entered by hand. Stands in for a real wallet
/// library, which signs nothing here anyway.
#[derive(Clone, Debug, Default)]
pub struct ManualWallet {
    address: Option<String>,
}

impl WalletConnector for ManualWallet {
    fn active_address(&self) -> Option<String> {
        self.address.clone()
    }

    fn connect(&mut self, address: &str) {
        let address = address.trim();
        self.address = if address.is_empty() {
            None
        } else {
            Some(address.to_string())
        };
    }

    fn disconnect(&mut self) {
        self.address = None;
    }
}
