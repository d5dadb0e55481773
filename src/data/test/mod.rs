mod badge;
